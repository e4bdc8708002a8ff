/// Half-height shared by every layer of the default tree.
pub const LAYER_HALF_HEIGHT: f32 = 70.0;
/// Topmost accepted y coordinate. The star topper sits on this line.
pub const CROWN_Y: f32 = 250.0;
/// Bottommost accepted y coordinate, the base of the lowest layer.
pub const BASE_Y: f32 = 450.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(self, other: Point) -> f32 {
        self.distance_sq(other).sqrt()
    }
}

/// Axis-aligned rectangle. Used both for surfaces in screen space and for
/// palette entry boxes in palette space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceRect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn around(center: Point, half_width: f32, half_height: f32) -> Self {
        Self::new(
            center.x - half_width,
            center.y - half_height,
            half_width * 2.0,
            half_height * 2.0,
        )
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Edges count as inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Translates a point from the enclosing space into this rectangle's
    /// own coordinates (origin at its top-left corner).
    pub fn to_local(&self, point: Point) -> Point {
        Point::new(point.x - self.left, point.y - self.top)
    }

    pub fn to_outer(&self, local: Point) -> Point {
        Point::new(local.x + self.left, local.y + self.top)
    }
}

/// One triangular layer of the tree silhouette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeLayer {
    pub center: Point,
    pub half_height: f32,
    pub base_width: f32,
}

impl TreeLayer {
    pub const fn new(center_x: f32, center_y: f32, base_width: f32) -> Self {
        Self {
            center: Point::new(center_x, center_y),
            half_height: LAYER_HALF_HEIGHT,
            base_width,
        }
    }

    /// Half-width of the accepting region at height `y`, or `None` when `y`
    /// is outside the layer's band or the width has shrunk to zero.
    pub fn half_width_at(&self, y: f32) -> Option<f32> {
        let dy = (y - self.center.y).abs();
        if dy > self.half_height || self.half_height <= 0.0 {
            return None;
        }
        let half_width = self.base_width / 2.0 * (1.0 - dy / self.half_height);
        (half_width > 0.0).then_some(half_width)
    }

    pub fn contains(&self, point: Point) -> bool {
        self.half_width_at(point.y)
            .is_some_and(|half| (point.x - self.center.x).abs() <= half)
    }

    /// Drawn triangle: apex at the layer centre, base `half_height` below it.
    pub fn outline(&self) -> [Point; 3] {
        let base_y = self.center.y + self.half_height;
        let half = self.base_width / 2.0;
        [
            Point::new(self.center.x - half, base_y),
            Point::new(self.center.x + half, base_y),
            self.center,
        ]
    }
}

/// The tree silhouette: a stack of layers clipped between the crown line and
/// the base line.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeShape {
    layers: Vec<TreeLayer>,
    crown_y: f32,
    base_y: f32,
}

impl Default for TreeShape {
    fn default() -> Self {
        Self::new(
            vec![
                TreeLayer::new(250.0, 380.0, 150.0),
                TreeLayer::new(250.0, 320.0, 120.0),
                TreeLayer::new(250.0, 260.0, 90.0),
            ],
            CROWN_Y,
            BASE_Y,
        )
    }
}

impl TreeShape {
    pub fn new(layers: Vec<TreeLayer>, crown_y: f32, base_y: f32) -> Self {
        Self {
            layers,
            crown_y,
            base_y,
        }
    }

    pub fn layers(&self) -> &[TreeLayer] {
        &self.layers
    }

    pub fn crown_y(&self) -> f32 {
        self.crown_y
    }

    pub fn base_y(&self) -> f32 {
        self.base_y
    }

    /// Whether a tree-surface point lies on the tree.
    pub fn contains(&self, point: Point) -> bool {
        if point.y < self.crown_y || point.y > self.base_y {
            return false;
        }
        self.layers.iter().any(|layer| layer.contains(point))
    }
}
