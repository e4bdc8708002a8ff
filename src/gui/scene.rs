use crate::decor::geometry::{Point, SurfaceRect};
use rand::Rng;

pub const TREE_SURFACE_SIZE: (f32, f32) = (500.0, 550.0);
pub const PALETTE_SURFACE_SIZE: (f32, f32) = (250.0, 500.0);

pub const TRUNK: SurfaceRect = SurfaceRect::new(235.0, 450.0, 30.0, 50.0);
pub const STAR_TOPPER_POS: Point = Point::new(250.0, 250.0);
pub const STAR_TOPPER_SIZE: f32 = 30.0;
pub const GROUND_LINE: [Point; 2] = [Point::new(50.0, 500.0), Point::new(450.0, 500.0)];

pub const SNOW_SIZE: f32 = 12.0;
const SNOW_X: (f32, f32) = (50.0, 450.0);
const SNOW_Y: (f32, f32) = (50.0, 200.0);

/// Static backdrop of the tree surface. Snowflake positions are rolled once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub snowflakes: Vec<Point>,
}

impl Scene {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, flakes: usize) -> Self {
        let snowflakes = (0..flakes)
            .map(|_| {
                Point::new(
                    rng.gen_range(SNOW_X.0..=SNOW_X.1),
                    rng.gen_range(SNOW_Y.0..=SNOW_Y.1),
                )
            })
            .collect();
        Self { snowflakes }
    }
}
