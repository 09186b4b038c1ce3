/// Outcome of flipping a user's favorite flag on a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
    /// The game does not exist; nothing was written.
    GameMissing,
}
