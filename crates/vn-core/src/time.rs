//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter owned by a single
//! [`TickClock`].  There is no wall-clock mapping: the engine only guarantees
//! relative ordering and fairness, never real-time pacing.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Process-wide scheduling clock.
///
/// Starts at [`Tick::ZERO`] and only ever moves forward by one per
/// scheduling cycle.  There is deliberately no `reset` or `set`.
#[derive(Clone, Debug, Default)]
pub struct TickClock {
    current: Tick,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by exactly one tick and return the new value.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current = Tick(self.current.0 + 1);
        self.current
    }

    #[inline]
    pub fn current(&self) -> Tick {
        self.current
    }
}

impl fmt::Display for TickClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.current)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level settings.
///
/// Loaded from the `sim` section of the venue configuration by `vn-sim`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Master RNG seed.  The same seed and configuration always reproduce the
    /// same selections and diversions.
    pub seed: u64,

    /// Tick budget for `Sim::run` in `vn-sim`.
    /// Checked only between ticks.
    pub total_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42, total_ticks: 100 }
    }
}

impl SimConfig {
    /// The tick after which `run` stops (inclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }
}
