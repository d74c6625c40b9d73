//! Periodic diversion: every so often an idle, eligible agent steps out to a
//! designated location.

use vn_core::{LocationId, RandomSource, Tick};

use crate::{ScheduleError, ScheduleResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiversionPolicy {
    /// Minimum ticks between two diversions of the same agent.
    pub interval_ticks: u64,

    /// Chance of diverting once the interval has elapsed.
    pub probability: f64,

    /// Where diverted agents go.
    pub destination: LocationId,
}

impl DiversionPolicy {
    pub fn new(interval_ticks: u64, probability: f64, destination: LocationId) -> ScheduleResult<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ScheduleError::BadProbability(probability));
        }
        Ok(Self { interval_ticks, probability, destination })
    }

    /// Whether the cooldown since `last` has elapsed at `now`.
    #[inline]
    pub fn cooled_down(&self, last: Tick, now: Tick) -> bool {
        now.since(last) >= self.interval_ticks
    }

    /// Decide whether an agent last diverted at `last` diverts at `now`.
    ///
    /// Draws from `rng` only once the cooldown has elapsed, so agents still
    /// cooling down do not perturb the random stream.
    pub fn should_divert(&self, last: Tick, now: Tick, rng: &mut dyn RandomSource) -> bool {
        self.cooled_down(last, now) && rng.chance(self.probability)
    }
}
