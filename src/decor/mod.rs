pub mod context;
pub mod controller;
pub mod geometry;
pub mod model;
pub mod palette;
pub mod state;
pub mod store;

pub use context::{DecoratorContext, SurfaceLayout};
pub use controller::{InteractionController, InteractionOutcome, PointerEvent};
pub use geometry::{Point, SurfaceRect, TreeLayer, TreeShape};
pub use model::{Catalogue, DecorColor, DecorationKind, KindId};
pub use palette::{Palette, PaletteEntry};
pub use state::InteractionState;
pub use store::{Handle, PlacedItem, PlacementStore};
