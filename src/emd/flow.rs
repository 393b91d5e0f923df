use crate::Mass;
use serde::Deserialize;
use serde::Serialize;

/// Mass moved from one source entry to one target entry.
///
/// Indices are positions in the source and target signatures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub from: usize,
    pub to: usize,
    pub amount: Mass,
}

impl From<(usize, usize, Mass)> for Flow {
    fn from((from, to, amount): (usize, usize, Mass)) -> Self {
        Self { from, to, amount }
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>4} -> {:<4} {:.6}", self.from, self.to, self.amount)
    }
}
