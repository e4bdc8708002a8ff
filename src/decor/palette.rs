use crate::decor::geometry::{Point, SurfaceRect};
use crate::decor::model::{Catalogue, KindId};

pub const PALETTE_COLUMNS: usize = 2;
/// Rows that fit on the 500 unit tall palette surface, labels included.
pub const PALETTE_ROWS: usize = 6;
pub const PALETTE_CAPACITY: usize = PALETTE_COLUMNS * PALETTE_ROWS;
pub const FIRST_ENTRY_CENTER: Point = Point::new(50.0, 50.0);
pub const ENTRY_SPACING_X: f32 = 100.0;
pub const ENTRY_SPACING_Y: f32 = 80.0;
pub const ENTRY_HALF_WIDTH: f32 = 30.0;
pub const ENTRY_HALF_HEIGHT: f32 = 20.0;
/// Distance from an entry's centre down to its label.
pub const LABEL_OFFSET_Y: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    pub kind: KindId,
    pub center: Point,
}

impl PaletteEntry {
    pub fn bounds(&self) -> SurfaceRect {
        SurfaceRect::around(self.center, ENTRY_HALF_WIDTH, ENTRY_HALF_HEIGHT)
    }

    pub fn label_pos(&self) -> Point {
        Point::new(self.center.x, self.center.y + LABEL_OFFSET_Y)
    }
}

/// Grid of selectable kinds, laid out in palette-local coordinates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Lays out the catalogue. Kinds past [`PALETTE_CAPACITY`] are left out.
    pub fn for_catalogue(catalogue: &Catalogue) -> Self {
        if catalogue.len() > PALETTE_CAPACITY {
            tracing::warn!(
                kinds = catalogue.len(),
                shown = PALETTE_CAPACITY,
                "palette is full; extra decorations are not shown"
            );
        }
        let entries = catalogue
            .iter()
            .take(PALETTE_CAPACITY)
            .map(|(kind, _)| PaletteEntry {
                kind,
                center: entry_center(kind.0),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Kind whose entry box contains the palette-local `point`.
    pub fn hit(&self, point: Point) -> Option<KindId> {
        self.entries
            .iter()
            .find(|entry| entry.bounds().contains(point))
            .map(|entry| entry.kind)
    }
}

fn entry_center(index: usize) -> Point {
    let row = index / PALETTE_COLUMNS;
    let col = index % PALETTE_COLUMNS;
    Point::new(
        FIRST_ENTRY_CENTER.x + col as f32 * ENTRY_SPACING_X,
        FIRST_ENTRY_CENTER.y + row as f32 * ENTRY_SPACING_Y,
    )
}
