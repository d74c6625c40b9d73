use vn_core::LocationId;

/// What an agent decided to do with its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnOutcome {
    /// Remain where it is.
    #[default]
    Stay,

    /// Start travelling to this location.  Resolved as an ordinary movement
    /// request, so it may still come back `Unreachable` or `AlreadyThere`.
    MoveTo(LocationId),
}
