//! The `TurnModel` trait, the extension point for whatever an agent does when
//! it is not moving.

use crate::{BehaviorResult, TurnContext, TurnOutcome};

/// Pluggable agent turn.
///
/// vn-sim calls [`take_turn`][Self::take_turn] for every selected agent that
/// is Idle and did not start a diversion this tick.  Calls are sequential and
/// in selection order, so implementations may keep mutable state (an RNG, a
/// transcript buffer, a connection to a chat sink).
///
/// # Example
///
/// ```rust,ignore
/// struct Wanderer { rng: SimRng }
///
/// impl TurnModel for Wanderer {
///     fn take_turn(&mut self, ctx: &TurnContext<'_>) -> BehaviorResult<TurnOutcome> {
///         let exits = ctx.exits();
///         if exits.is_empty() || !self.rng.chance(0.3) {
///             return Ok(TurnOutcome::Stay);
///         }
///         let pick = self.rng.gen_range(0..exits.len());
///         Ok(TurnOutcome::MoveTo(exits[pick]))
///     }
/// }
/// ```
pub trait TurnModel {
    fn take_turn(&mut self, ctx: &TurnContext<'_>) -> BehaviorResult<TurnOutcome>;
}

impl<T: TurnModel + ?Sized> TurnModel for Box<T> {
    fn take_turn(&mut self, ctx: &TurnContext<'_>) -> BehaviorResult<TurnOutcome> {
        (**self).take_turn(ctx)
    }
}
