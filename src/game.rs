//! Traits defining the game-state contract consumed by the search core.
//!
//! The search engine owns no game rules. Everything it needs from the game
//! is expressed through the [`GameState`] trait: legal-move enumeration, a
//! pure move-application function, and a per-side terminal verdict. The
//! engine treats states as opaque, cloneable snapshots.

use std::fmt::Debug;

/// Trait for actions (moves) that can be taken in a game.
///
/// Equality is used by [`advance`](crate::SearchTree::advance) to match a
/// real move against the children enumerated at expansion time.
pub trait GameAction: Clone + Debug + PartialEq + Send + Sync {}

/// Trait for the players (sides) of a game.
pub trait Player: Clone + Debug + PartialEq + Send + Sync {}

/// Terminal verdict of a state from the perspective of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The game is over and the queried side won.
    Won,
    /// The game is over and the queried side lost.
    Lost,
    /// The game has not been decided.
    Undecided,
}

/// Trait defining the game-state interface required by the search tree.
///
/// Implementations must keep [`apply`](GameState::apply) pure: the engine
/// relies on it to keep sibling nodes' state snapshots independent.
pub trait GameState: Clone + Send + Sync {
    /// The type of actions that can be taken in this game.
    type Action: GameAction;

    /// The type of players in this game.
    type Player: Player;

    /// Returns the full legal-move set for the side to move.
    ///
    /// Order is not semantically significant but must be deterministic for a
    /// given state, so that expansion (and therefore test runs) are
    /// reproducible. Terminal states should return an empty list.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Applies an action, returning the resulting state.
    ///
    /// Must not mutate `self`. The action is assumed to be one of
    /// [`legal_actions`](GameState::legal_actions); the engine does not
    /// re-validate it.
    fn apply(&self, action: &Self::Action) -> Self;

    /// Compares this state's recorded outcome against `side`.
    ///
    /// Returns [`Verdict::Won`] or [`Verdict::Lost`] once the game is over,
    /// [`Verdict::Undecided`] otherwise. Must not panic for a well-formed
    /// state.
    fn verdict_for(&self, side: &Self::Player) -> Verdict;

    /// Returns the player whose turn it is in this state.
    fn side_to_move(&self) -> Self::Player;

    /// Returns true if this state is terminal (the game is decided).
    ///
    /// The default derives this from [`verdict_for`](GameState::verdict_for)
    /// on the side to move; override when the game tracks it directly.
    fn is_terminal(&self) -> bool {
        self.verdict_for(&self.side_to_move()) != Verdict::Undecided
    }
}

impl GameAction for usize {}
impl GameAction for u32 {}
impl GameAction for (usize, usize) {}

impl Player for usize {}
impl Player for i32 {}
impl Player for char {}
impl Player for String {}
