use crate::decor::geometry::Point;
use crate::decor::model::KindId;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging {
        kind: KindId,
        /// Screen position of the press that started the drag.
        origin: Point,
        /// Latest screen position of the pointer.
        cursor: Point,
    },
}

impl InteractionState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn dragged_kind(&self) -> Option<KindId> {
        match self {
            Self::Dragging { kind, .. } => Some(*kind),
            Self::Idle => None,
        }
    }

    pub fn cursor(&self) -> Option<Point> {
        match self {
            Self::Dragging { cursor, .. } => Some(*cursor),
            Self::Idle => None,
        }
    }
}
