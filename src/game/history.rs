use super::Player;

/// One placed piece: where it landed and who placed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    pub column: usize,
    pub row: usize,
    pub player: Player,
}

/// Moves played so far, most recent last. Only ever pushed to or popped from
/// the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    moves: Vec<MoveRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.moves.pop()
    }

    pub fn last(&self) -> Option<MoveRecord> {
        self.moves.last().copied()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }
}
