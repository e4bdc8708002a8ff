use crate::decor::model::DecorColor;
use eframe::egui;

pub const WINDOW_BG: egui::Color32 = egui::Color32::from_rgb(0x00, 0x11, 0x22);
pub const PALETTE_BG: egui::Color32 = egui::Color32::from_rgb(0x11, 0x22, 0x33);
pub const SURFACE_BORDER: egui::Color32 = egui::Color32::from_rgb(0x00, 0x66, 0x00);
pub const TITLE: egui::Color32 = egui::Color32::from_rgb(0x00, 0xFF, 0x00);

pub const ENTRY_FILL: egui::Color32 = egui::Color32::from_rgb(0x33, 0x44, 0x55);
pub const ENTRY_OUTLINE: egui::Color32 = egui::Color32::WHITE;
pub const LABEL: egui::Color32 = egui::Color32::WHITE;

pub const FOLIAGE_FILL: egui::Color32 = egui::Color32::from_rgb(0x00, 0x66, 0x00);
pub const FOLIAGE_OUTLINE: egui::Color32 = egui::Color32::from_rgb(0x00, 0x44, 0x00);
pub const TRUNK_FILL: egui::Color32 = egui::Color32::from_rgb(0x8B, 0x45, 0x13);
pub const TRUNK_OUTLINE: egui::Color32 = egui::Color32::from_rgb(0x65, 0x43, 0x21);
pub const STAR_TOPPER: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xD7, 0x00);
pub const GROUND: egui::Color32 = egui::Color32::WHITE;
pub const SNOW: egui::Color32 = egui::Color32::WHITE;

pub fn decor_color_to_color32(color: DecorColor) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Dimmed version of a decoration colour for the glyph following the pointer.
pub fn ghost_color(color: DecorColor) -> egui::Color32 {
    decor_color_to_color32(color).gamma_multiply(0.6)
}

pub fn apply_visuals(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = WINDOW_BG;
    visuals.window_fill = WINDOW_BG;
    visuals.override_text_color = Some(LABEL);
    ctx.set_visuals(visuals);
}
