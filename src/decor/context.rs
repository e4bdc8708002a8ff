use crate::decor::geometry::{SurfaceRect, TreeShape};
use crate::decor::model::{default_decorations, Catalogue};
use crate::decor::palette::Palette;
use crate::decor::store::PlacementStore;
use crate::settings::Settings;

pub const DEFAULT_DELETE_TOLERANCE: f32 = 15.0;

/// Screen-space rectangles of the two surfaces. Refreshed every frame by the
/// GUI; `None` until a surface has been laid out.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceLayout {
    pub palette: Option<SurfaceRect>,
    pub tree: Option<SurfaceRect>,
}

/// Everything the interaction controller operates on.
#[derive(Debug, Clone)]
pub struct DecoratorContext {
    pub catalogue: Catalogue,
    pub palette: Palette,
    pub shape: TreeShape,
    pub store: PlacementStore,
    pub layout: SurfaceLayout,
    pub delete_tolerance: f32,
}

impl Default for DecoratorContext {
    fn default() -> Self {
        Self::new(
            Catalogue::default(),
            PlacementStore::default(),
            DEFAULT_DELETE_TOLERANCE,
        )
    }
}

impl DecoratorContext {
    pub fn new(catalogue: Catalogue, store: PlacementStore, delete_tolerance: f32) -> Self {
        let palette = Palette::for_catalogue(&catalogue);
        Self {
            catalogue,
            palette,
            shape: TreeShape::default(),
            store,
            layout: SurfaceLayout::default(),
            delete_tolerance,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let kinds = if settings.decorations.is_empty() {
            tracing::warn!("settings list no decorations; using the built-in set");
            default_decorations()
        } else {
            settings.decorations.clone()
        };
        Self::new(
            Catalogue::new(kinds),
            PlacementStore::new(settings.placement_jitter),
            settings.delete_tolerance,
        )
    }
}
