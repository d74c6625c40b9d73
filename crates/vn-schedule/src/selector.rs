//! Per-tick agent selection.

use tracing::debug;
use vn_core::{AgentId, RandomSource, Tick, TickClock};

use crate::{ScheduleError, ScheduleResult};

// ── Configuration ─────────────────────────────────────────────────────────────

/// One entry of the weighted draw that sizes a tick's candidate window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionTier {
    /// Relative weight of this tier in the draw.
    pub weight: u32,

    /// Fraction of the active roster considered when this tier is drawn.
    /// The window is `ceil(share * |A|)`, clamped to `1..=|A|`.
    pub share: f64,
}

impl SelectionTier {
    pub const fn new(weight: u32, share: f64) -> Self {
        Self { weight, share }
    }

    /// Window size for a roster of `active` agents (`active > 0`).
    pub fn window(&self, active: usize) -> usize {
        let k = (self.share * active as f64).ceil() as usize;
        k.clamp(1, active)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    pub tiers: Vec<SelectionTier>,

    /// Independent chance that each windowed candidate acts.
    pub inclusion_probability: f64,
}

impl Default for SelectorConfig {
    /// Mostly small windows: the whole roster 10% of the time, half of it 30%,
    /// a quarter 60%.
    fn default() -> Self {
        Self {
            tiers: vec![
                SelectionTier::new(1, 1.0),
                SelectionTier::new(3, 0.5),
                SelectionTier::new(6, 0.25),
            ],
            inclusion_probability: 0.7,
        }
    }
}

impl SelectorConfig {
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.tiers.iter().all(|t| t.weight == 0) {
            return Err(ScheduleError::NoTiers);
        }
        if let Some(t) = self.tiers.iter().find(|t| !(t.share > 0.0 && t.share <= 1.0)) {
            return Err(ScheduleError::BadShare(t.share));
        }
        if !(0.0..=1.0).contains(&self.inclusion_probability) {
            return Err(ScheduleError::BadProbability(self.inclusion_probability));
        }
        Ok(())
    }

    fn weights(&self) -> Vec<u32> {
        self.tiers.iter().map(|t| t.weight).collect()
    }
}

// ── TickScheduler ─────────────────────────────────────────────────────────────

/// Owns the tick clock and picks the agents that act on each tick.
#[derive(Debug)]
pub struct TickScheduler {
    clock:  TickClock,
    config: SelectorConfig,
}

impl TickScheduler {
    pub fn new(config: SelectorConfig) -> ScheduleResult<Self> {
        config.validate()?;
        Ok(Self { clock: TickClock::new(), config })
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.clock.current()
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Advance the clock and choose this tick's agents.
    ///
    /// `active` must be the active roster in a stable order (ascending id).
    /// The result preserves rotated order and has no duplicates.  An empty
    /// roster still advances the clock and yields nothing.
    ///
    /// Randomness is consumed in a fixed order: one tier draw, then one
    /// inclusion draw per windowed candidate.
    pub fn advance_tick(&mut self, active: &[AgentId], rng: &mut dyn RandomSource) -> Vec<AgentId> {
        let tick = self.clock.advance();
        let n = active.len();
        if n == 0 {
            debug!(%tick, "no active agents");
            return Vec::new();
        }

        let k = rng
            .pick_weighted(&self.config.weights())
            .and_then(|i| self.config.tiers.get(i))
            .map_or(n, |tier| tier.window(n));

        let offset = (tick.0 % n as u64) as usize;
        let window: Vec<AgentId> = active.iter().cycle().skip(offset).take(k).copied().collect();

        let p = self.config.inclusion_probability;
        let mut selected: Vec<AgentId> = window.iter().copied().filter(|_| rng.chance(p)).collect();
        if selected.is_empty() {
            selected.push(window[0]);
        }

        debug!(%tick, active = n, window = k, selected = selected.len(), "agents selected");
        selected
    }
}
