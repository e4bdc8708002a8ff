use crate::decor::context::DecoratorContext;
use crate::decor::geometry::{Point, SurfaceRect};
use crate::decor::model::{DecorationKind, KindId};
use crate::decor::store::Handle;
use crate::gui::scene::{Scene, GROUND_LINE, SNOW_SIZE, STAR_TOPPER_POS, STAR_TOPPER_SIZE, TRUNK};
use crate::gui::theme;
use eframe::egui;

const LABEL_SIZE: f32 = 10.0;

pub fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

pub fn to_surface_rect(rect: egui::Rect) -> SurfaceRect {
    SurfaceRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

fn to_screen(surface: egui::Rect, local: Point) -> egui::Pos2 {
    surface.min + egui::vec2(local.x, local.y)
}

fn local_rect(surface: egui::Rect, local: SurfaceRect) -> egui::Rect {
    egui::Rect::from_min_size(
        to_screen(surface, Point::new(local.left, local.top)),
        egui::vec2(local.width, local.height),
    )
}

fn glyph(painter: &egui::Painter, pos: egui::Pos2, symbol: &str, size: f32, color: egui::Color32) {
    painter.text(
        pos,
        egui::Align2::CENTER_CENTER,
        symbol,
        egui::FontId::proportional(size),
        color,
    );
}

/// Backdrop, tree and every placed decoration, bottom to top.
pub fn paint_tree_surface(
    painter: &egui::Painter,
    surface: egui::Rect,
    scene: &Scene,
    context: &DecoratorContext,
    hovered: Option<Handle>,
) {
    painter.rect(
        surface,
        0.0,
        theme::WINDOW_BG,
        egui::Stroke::new(2.0, theme::SURFACE_BORDER),
    );

    for flake in &scene.snowflakes {
        glyph(painter, to_screen(surface, *flake), "❄", SNOW_SIZE, theme::SNOW);
    }

    painter.rect(
        local_rect(surface, TRUNK),
        0.0,
        theme::TRUNK_FILL,
        egui::Stroke::new(2.0, theme::TRUNK_OUTLINE),
    );

    for layer in context.shape.layers() {
        let points = layer
            .outline()
            .iter()
            .map(|p| to_screen(surface, *p))
            .collect();
        painter.add(egui::Shape::convex_polygon(
            points,
            theme::FOLIAGE_FILL,
            egui::Stroke::new(2.0, theme::FOLIAGE_OUTLINE),
        ));
    }

    glyph(
        painter,
        to_screen(surface, STAR_TOPPER_POS),
        "☆",
        STAR_TOPPER_SIZE,
        theme::STAR_TOPPER,
    );
    painter.line_segment(
        [
            to_screen(surface, GROUND_LINE[0]),
            to_screen(surface, GROUND_LINE[1]),
        ],
        egui::Stroke::new(2.0, theme::GROUND),
    );

    for item in context.store.iter() {
        let Some(kind) = context.catalogue.get(item.kind) else {
            continue;
        };
        let pos = to_screen(surface, item.position);
        if hovered == Some(item.handle) {
            painter.circle_stroke(
                pos,
                kind.size * 0.75,
                egui::Stroke::new(1.0, theme::ENTRY_OUTLINE.gamma_multiply(0.5)),
            );
        }
        glyph(
            painter,
            pos,
            &kind.symbol,
            kind.size,
            theme::decor_color_to_color32(kind.color),
        );
    }
}

pub fn paint_palette(
    painter: &egui::Painter,
    surface: egui::Rect,
    context: &DecoratorContext,
    selected: Option<KindId>,
) {
    painter.rect(
        surface,
        0.0,
        theme::PALETTE_BG,
        egui::Stroke::new(2.0, theme::SURFACE_BORDER),
    );

    for entry in context.palette.entries() {
        let Some(kind) = context.catalogue.get(entry.kind) else {
            continue;
        };
        let outline = if selected == Some(entry.kind) {
            theme::TITLE
        } else {
            theme::ENTRY_OUTLINE
        };
        painter.rect(
            local_rect(surface, entry.bounds()),
            0.0,
            theme::ENTRY_FILL,
            egui::Stroke::new(2.0, outline),
        );
        glyph(
            painter,
            to_screen(surface, entry.center),
            &kind.symbol,
            kind.size,
            theme::decor_color_to_color32(kind.color),
        );
        glyph(
            painter,
            to_screen(surface, entry.label_pos()),
            kind.short_label(),
            LABEL_SIZE,
            theme::LABEL,
        );
    }
}

pub fn paint_drag_ghost(painter: &egui::Painter, at: Point, kind: &DecorationKind) {
    glyph(
        painter,
        egui::pos2(at.x, at.y),
        &kind.symbol,
        kind.size,
        theme::ghost_color(kind.color),
    );
}
