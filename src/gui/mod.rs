pub mod canvas;
pub mod scene;
pub mod theme;

use crate::decor::context::DecoratorContext;
use crate::decor::controller::{InteractionController, InteractionOutcome, PointerEvent};
use crate::decor::store::Handle;
use crate::settings::Settings;
use eframe::egui;
use self::scene::{Scene, PALETTE_SURFACE_SIZE, TREE_SURFACE_SIZE};

pub const WINDOW_TITLE: &str = "Christmas Tree Decorator";

/// Translates this frame's primary-button activity into controller events.
pub fn pointer_events(pointer: &egui::PointerState) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    let Some(pos) = pointer.interact_pos() else {
        return events;
    };
    let point = canvas::to_point(pos);
    if pointer.primary_pressed() {
        events.push(PointerEvent::Press(point));
    }
    if pointer.is_moving() && pointer.primary_down() {
        events.push(PointerEvent::Move(point));
    }
    if pointer.primary_released() {
        events.push(PointerEvent::Release(point));
    }
    events
}

pub struct DecoratorApp {
    context: DecoratorContext,
    controller: InteractionController,
    scene: Scene,
}

impl DecoratorApp {
    pub fn new(settings: &Settings) -> Self {
        let scene = Scene::generate(&mut rand::thread_rng(), settings.snow_flakes);
        Self::with_context(DecoratorContext::from_settings(settings), scene)
    }

    pub fn with_context(context: DecoratorContext, scene: Scene) -> Self {
        Self {
            context,
            controller: InteractionController::new(),
            scene,
        }
    }

    pub fn context(&self) -> &DecoratorContext {
        &self.context
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Feeds events to the controller. Returns whether the store changed.
    pub fn dispatch(&mut self, events: &[PointerEvent]) -> bool {
        let mut changed = false;
        for event in events {
            let outcome = self.controller.handle(*event, &mut self.context);
            if !matches!(outcome, InteractionOutcome::Ignored | InteractionOutcome::DragMoved) {
                tracing::trace!(?event, ?outcome, "pointer event handled");
            }
            changed |= outcome.changed_store();
        }
        changed
    }

    /// Lays out and paints one frame, then applies the frame's pointer input.
    pub fn ui(&mut self, ctx: &egui::Context) {
        let hovered = self.hovered_item(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::WINDOW_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.horizontal_top(|ui| {
                    self.tree_surface_ui(ui, hovered);
                    ui.add_space(10.0);
                    ui.vertical(|ui| {
                        ui.label(
                            egui::RichText::new("🎄 Decorations 🎄")
                                .size(16.0)
                                .strong()
                                .color(theme::TITLE),
                        );
                        ui.add_space(12.0);
                        self.palette_ui(ui);
                        ui.add_space(6.0);
                        self.status_ui(ui);
                    });
                });
            });

        let events = ctx.input(|i| pointer_events(&i.pointer));
        if self.dispatch(&events) {
            ctx.request_repaint();
        }

        if let (Some(kind), Some(cursor)) = (
            self.controller.state().dragged_kind(),
            self.controller.state().cursor(),
        ) {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
            if let Some(kind) = self.context.catalogue.get(kind) {
                let painter = ctx.layer_painter(egui::LayerId::new(
                    egui::Order::Tooltip,
                    egui::Id::new("decoration_drag_ghost"),
                ));
                canvas::paint_drag_ghost(&painter, cursor, kind);
            }
        } else if hovered.is_some() {
            ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
        }
    }

    fn tree_surface_ui(&mut self, ui: &mut egui::Ui, hovered: Option<Handle>) {
        let size = egui::vec2(TREE_SURFACE_SIZE.0, TREE_SURFACE_SIZE.1);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        self.context.layout.tree = Some(canvas::to_surface_rect(response.rect));
        canvas::paint_tree_surface(&painter, response.rect, &self.scene, &self.context, hovered);
    }

    fn palette_ui(&mut self, ui: &mut egui::Ui) {
        let size = egui::vec2(PALETTE_SURFACE_SIZE.0, PALETTE_SURFACE_SIZE.1);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        self.context.layout.palette = Some(canvas::to_surface_rect(response.rect));
        canvas::paint_palette(
            &painter,
            response.rect,
            &self.context,
            self.controller.state().dragged_kind(),
        );
    }

    fn status_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let placed = self.context.store.len();
            ui.label(format!("{placed} placed"));
            if ui
                .add_enabled(placed > 0, egui::Button::new("Clear tree"))
                .clicked()
            {
                self.context.store.clear();
                tracing::info!(removed = placed, "cleared all decorations");
            }
        });
    }

    /// Placed item a click at the current pointer position would remove.
    fn hovered_item(&self, ctx: &egui::Context) -> Option<Handle> {
        if self.controller.state().is_dragging() {
            return None;
        }
        let pos = ctx.input(|i| i.pointer.hover_pos())?;
        let tree = self.context.layout.tree?;
        let point = canvas::to_point(pos);
        if !tree.contains(point) {
            return None;
        }
        self.context
            .store
            .nearest(tree.to_local(point), self.context.delete_tolerance)
            .map(|item| item.handle)
    }
}

impl eframe::App for DecoratorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
