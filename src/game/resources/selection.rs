//! Current piece selection

use crate::game::types::BoardSquare;

/// The square the human picked and where that piece may go
///
/// `destinations` is computed by the rules engine when the selection is made
/// and is not refreshed afterwards; a new click makes a new `Selection`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub square: BoardSquare,
    pub destinations: Vec<BoardSquare>,
}

impl Selection {
    pub fn new(square: BoardSquare, destinations: Vec<BoardSquare>) -> Self {
        Self {
            square,
            destinations,
        }
    }

    pub fn is_destination(&self, square: BoardSquare) -> bool {
        self.destinations.contains(&square)
    }
}
