use crate::decor::context::DecoratorContext;
use crate::decor::geometry::Point;
use crate::decor::model::KindId;
use crate::decor::state::InteractionState;
use crate::decor::store::Handle;

/// Primary-button pointer events in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release(Point),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    Ignored,
    DragStarted { kind: KindId },
    DragMoved,
    Placed { handle: Handle },
    DropRejected,
    Removed { handle: Handle },
}

impl InteractionOutcome {
    pub fn changed_store(self) -> bool {
        matches!(self, Self::Placed { .. } | Self::Removed { .. })
    }
}

/// Drag-and-drop state machine between the palette and the tree surface.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    state: InteractionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn handle(&mut self, event: PointerEvent, ctx: &mut DecoratorContext) -> InteractionOutcome {
        match event {
            PointerEvent::Press(point) => self.handle_press(point, ctx),
            PointerEvent::Move(point) => self.handle_move(point),
            PointerEvent::Release(point) => self.handle_release(point, ctx),
        }
    }

    fn handle_press(&mut self, point: Point, ctx: &mut DecoratorContext) -> InteractionOutcome {
        if self.state.is_dragging() {
            return InteractionOutcome::Ignored;
        }

        if let Some(palette_rect) = ctx.layout.palette.filter(|rect| rect.contains(point)) {
            let Some(kind) = ctx.palette.hit(palette_rect.to_local(point)) else {
                return InteractionOutcome::Ignored;
            };
            self.state = InteractionState::Dragging {
                kind,
                origin: point,
                cursor: point,
            };
            tracing::debug!(?kind, "drag started");
            return InteractionOutcome::DragStarted { kind };
        }

        if let Some(tree_rect) = ctx.layout.tree.filter(|rect| rect.contains(point)) {
            let local = tree_rect.to_local(point);
            return match ctx.store.remove_nearest(local, ctx.delete_tolerance) {
                Some(item) => {
                    tracing::info!(handle = %item.handle, "removed decoration");
                    InteractionOutcome::Removed {
                        handle: item.handle,
                    }
                }
                None => InteractionOutcome::Ignored,
            };
        }

        InteractionOutcome::Ignored
    }

    fn handle_move(&mut self, point: Point) -> InteractionOutcome {
        match &mut self.state {
            InteractionState::Dragging { cursor, .. } => {
                *cursor = point;
                InteractionOutcome::DragMoved
            }
            InteractionState::Idle => InteractionOutcome::Ignored,
        }
    }

    fn handle_release(&mut self, point: Point, ctx: &mut DecoratorContext) -> InteractionOutcome {
        let InteractionState::Dragging { kind, .. } = std::mem::take(&mut self.state) else {
            return InteractionOutcome::Ignored;
        };

        let target = ctx
            .layout
            .tree
            .filter(|rect| rect.contains(point))
            .map(|rect| rect.to_local(point))
            .filter(|local| ctx.shape.contains(*local));

        match target {
            Some(local) => {
                let handle = ctx.store.add(kind, local);
                tracing::info!(%handle, ?kind, x = local.x, y = local.y, "placed decoration");
                InteractionOutcome::Placed { handle }
            }
            None => {
                tracing::debug!(?kind, "drop outside the tree ignored");
                InteractionOutcome::DropRejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decor::context::SurfaceLayout;
    use crate::decor::geometry::SurfaceRect;
    use crate::decor::store::PlacementStore;

    fn context() -> DecoratorContext {
        let mut ctx = DecoratorContext::default();
        ctx.store = PlacementStore::seeded(0.0, 3);
        ctx.layout = SurfaceLayout {
            tree: Some(SurfaceRect::new(10.0, 10.0, 500.0, 550.0)),
            palette: Some(SurfaceRect::new(520.0, 60.0, 250.0, 500.0)),
        };
        ctx
    }

    #[test]
    fn move_updates_cursor_only() {
        let mut ctx = context();
        let mut controller = InteractionController::new();
        controller.handle(PointerEvent::Press(Point::new(570.0, 110.0)), &mut ctx);
        let outcome = controller.handle(PointerEvent::Move(Point::new(300.0, 300.0)), &mut ctx);

        assert_eq!(outcome, InteractionOutcome::DragMoved);
        assert_eq!(controller.state().cursor(), Some(Point::new(300.0, 300.0)));
        assert!(ctx.store.is_empty());
    }

    #[test]
    fn press_while_dragging_is_ignored() {
        let mut ctx = context();
        let mut controller = InteractionController::new();
        controller.handle(PointerEvent::Press(Point::new(570.0, 110.0)), &mut ctx);
        let outcome = controller.handle(PointerEvent::Press(Point::new(670.0, 110.0)), &mut ctx);

        assert_eq!(outcome, InteractionOutcome::Ignored);
        assert_eq!(controller.state().dragged_kind(), Some(KindId(0)));
    }

    #[test]
    fn release_before_layout_abandons_drag() {
        let mut ctx = context();
        let mut controller = InteractionController::new();
        controller.handle(PointerEvent::Press(Point::new(570.0, 110.0)), &mut ctx);
        ctx.layout.tree = None;

        let outcome = controller.handle(PointerEvent::Release(Point::new(260.0, 390.0)), &mut ctx);
        assert_eq!(outcome, InteractionOutcome::DropRejected);
        assert_eq!(controller.state(), InteractionState::Idle);
    }
}
