use crate::state::Position;

use super::BlockError;

/// Result of a block attempt, as handed to the presentation shell.
pub type BlockResult = Result<BlockOutcome, BlockError>;

/// Where a game stands.
///
/// Renders as a stable snake_case identifier (`in_progress`, `cat_escaped`,
/// `cat_trapped`) for logs and serialized output; user-facing text belongs to
/// the shell.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Outcome {
    /// Cat is still inside and has somewhere to go.
    #[default]
    InProgress,
    /// Cat stepped onto a boundary cell. The player lost.
    CatEscaped,
    /// Cat has no route to the boundary. The player won.
    CatTrapped,
}

impl Outcome {
    /// Terminal outcomes reject every mutation until the next reset.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Accepted block and the cat's response to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockOutcome {
    /// Cell that was blocked.
    pub blocked: Position,
    /// Cat position before the move.
    pub from: Position,
    /// Cat position after the move; equal to `from` when trapped.
    pub to: Position,
    /// Hops still separating the cat from the goal of the route it chose.
    /// `None` when the cat is trapped.
    pub remaining_hops: Option<usize>,
    pub outcome: Outcome,
}

impl BlockOutcome {
    /// True if the cat changed cells this turn.
    pub fn cat_moved(&self) -> bool {
        self.from != self.to
    }
}
