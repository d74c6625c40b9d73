//! A no-op turn model; agents always stay put.

use crate::{BehaviorResult, TurnContext, TurnModel, TurnOutcome};

/// A [`TurnModel`] that always returns [`TurnOutcome::Stay`].
///
/// Useful in tests or when only scheduled diversions should move anyone.
pub struct NoopTurns;

impl TurnModel for NoopTurns {
    fn take_turn(&mut self, _ctx: &TurnContext<'_>) -> BehaviorResult<TurnOutcome> {
        Ok(TurnOutcome::Stay)
    }
}
