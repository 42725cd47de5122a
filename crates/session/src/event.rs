use chess_core::{PieceKind, Square};
use serde::{Deserialize, Serialize};

/// Input delivered by a presentation surface.
///
/// Serialized with a `type` tag, e.g. `{"type": "dropped", "from": "e2", "to": "e4"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    SquareClicked { square: Square },
    DragStarted { square: Square },
    Dropped { from: Square, to: Square },
    PromotionChosen { piece: PieceKind },
    Reset,
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod event_tests;
