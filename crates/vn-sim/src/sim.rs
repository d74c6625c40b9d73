//! The `Sim` struct, its tick loop, and the administrative interface.

use tracing::{debug, info, warn};

use vn_agent::{Agent, AgentSpec, Roster};
use vn_behavior::{TurnContext, TurnModel, TurnOutcome};
use vn_core::{AgentId, LocationId, RandomSource, SimConfig, Tick};
use vn_mobility::{MobilityEngine, MobilityError, MoveOutcome, MovementState};
use vn_schedule::{DiversionPolicy, TickScheduler};
use vn_spatial::{LocationGraph, Router, SpatialError};

use crate::{SimObserver, SimResult, SimView, TickReport};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<T, R>` holds all simulation state and processes one tick at a time:
///
/// 1. **Select**: the scheduler advances the clock and picks agents from the
///    active roster.
/// 2. **Process**, for each selected agent in selection order:
///    - en route → advance one hop (emitting `Hop` or `Arrival`);
///    - idle, eligible and due → divert; a started diversion uses the turn;
///    - otherwise → call [`TurnModel::take_turn`] and apply its outcome.
///
/// Everything runs on the caller's thread; a tick finishes before the next
/// begins, and administrative calls happen between ticks.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<T: TurnModel, R: Router> {
    pub(crate) config:    SimConfig,
    pub(crate) graph:     LocationGraph,
    pub(crate) roster:    Roster,
    pub(crate) mobility:  MobilityEngine<R>,
    pub(crate) scheduler: TickScheduler,
    pub(crate) diversion: Option<DiversionPolicy>,
    pub(crate) turns:     T,
    pub(crate) rng:       Box<dyn RandomSource>,
}

impl<T: TurnModel, R: Router> Sim<T, R> {
    // ── Running ───────────────────────────────────────────────────────────

    /// Run until the tick budget in `config` is spent or the observer asks to
    /// stop.  Both are checked only between ticks.
    ///
    /// Returns the last processed tick.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Tick> {
        loop {
            let now = self.current_tick();
            if now >= self.config.end_tick() || observer.should_stop(now) {
                break;
            }
            self.step(observer)?;
        }
        let last = self.current_tick();
        info!(tick = %last, "simulation finished");
        observer.on_sim_end(last);
        Ok(last)
    }

    /// Run exactly `n` ticks from the current position (ignores the budget
    /// and the stop hook).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Process a single tick.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickReport> {
        let active = self.roster.active_ids();
        let selected = self.scheduler.advance_tick(&active, self.rng.as_mut());
        let tick = self.scheduler.current_tick();

        observer.on_tick_start(tick, &selected);
        let mut report = TickReport {
            tick,
            active: active.len(),
            selected: selected.len(),
            ..TickReport::default()
        };

        for &agent in &selected {
            self.process_agent(agent, tick, observer, &mut report)?;
        }

        observer.on_tick_end(&report);
        Ok(report)
    }

    // ── Per-agent processing ──────────────────────────────────────────────

    fn process_agent<O: SimObserver>(
        &mut self,
        agent:    AgentId,
        tick:     Tick,
        observer: &mut O,
        report:   &mut TickReport,
    ) -> SimResult<()> {
        if self.mobility.is_en_route(agent)? {
            let record = self.roster.get_mut(agent)?;
            if let Some(event) = self.mobility.advance_one_hop(agent, &mut record.location, &self.graph, tick)? {
                if event.is_arrival() {
                    report.arrivals += 1;
                } else {
                    report.hops += 1;
                }
                observer.on_movement(&event, SimView { graph: &self.graph, roster: &self.roster });
            }
            return Ok(());
        }

        if let Some(destination) = self.try_divert(agent, tick)? {
            report.diversions += 1;
            observer.on_diversion(tick, agent, destination);
            return Ok(());
        }

        self.take_turn(agent, tick, report)
    }

    /// Returns the destination when a diversion journey started.
    fn try_divert(&mut self, agent: AgentId, tick: Tick) -> SimResult<Option<LocationId>> {
        let Some(policy) = self.diversion else {
            return Ok(None);
        };
        let record = self.roster.get_mut(agent)?;
        if !record.diversion_eligible
            || !policy.should_divert(record.last_diversion, tick, self.rng.as_mut())
        {
            return Ok(None);
        }

        // The cooldown is stamped on the attempt, whether or not a route is
        // found below.
        record.stamp_diversion(tick);
        let from = record.location;

        match self.mobility.request_move(agent, from, policy.destination, &self.graph) {
            Ok(MoveOutcome::Started { steps }) => {
                info!(%agent, %tick, destination = %policy.destination, steps, "diversion started");
                Ok(Some(policy.destination))
            }
            Ok(outcome) => {
                debug!(%agent, %tick, ?outcome, "diversion not started");
                Ok(None)
            }
            Err(MobilityError::Routing(e @ SpatialError::CrossFloor { .. })) => {
                debug!(%agent, %tick, error = %e, "diversion target on another floor");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn take_turn(&mut self, agent: AgentId, tick: Tick, report: &mut TickReport) -> SimResult<()> {
        let record = self.roster.get(agent)?;
        let location = record.location;
        let ctx = TurnContext::new(
            agent,
            &record.name,
            location,
            self.graph.name(location)?,
            tick,
            &self.graph,
        );

        let outcome = match self.turns.take_turn(&ctx) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(%agent, %tick, error = %e, "turn failed; skipping");
                report.failed_turns += 1;
                return Ok(());
            }
        };
        report.turns += 1;

        if let TurnOutcome::MoveTo(destination) = outcome {
            match self.mobility.request_move(agent, location, destination, &self.graph) {
                Ok(outcome) => debug!(%agent, %tick, %destination, ?outcome, "turn requested move"),
                Err(e) => warn!(%agent, %tick, %destination, error = %e, "turn move rejected"),
            }
        }
        Ok(())
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.scheduler.current_tick()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn agent(&self, id: AgentId) -> SimResult<&Agent> {
        Ok(self.roster.get(id)?)
    }

    pub fn agent_id(&self, name: &str) -> SimResult<AgentId> {
        Ok(self.roster.id_of(name)?)
    }

    pub fn location_id(&self, name: &str) -> SimResult<LocationId> {
        Ok(self.graph.id_of(name)?)
    }

    pub fn movement(&self, id: AgentId) -> SimResult<&MovementState> {
        Ok(self.mobility.state(id)?)
    }

    pub fn diversion_policy(&self) -> Option<&DiversionPolicy> {
        self.diversion.as_ref()
    }

    pub fn turns(&self) -> &T {
        &self.turns
    }

    pub fn turns_mut(&mut self) -> &mut T {
        &mut self.turns
    }

    // ── Administrative interface ──────────────────────────────────────────
    //
    // Called between ticks.  Each call validates its inputs before mutating
    // anything, so a rejected request leaves the simulation untouched.

    /// Add an agent at its home location, idle.
    pub fn add_agent(&mut self, spec: AgentSpec) -> SimResult<AgentId> {
        self.graph
            .location(spec.home)
            .inspect_err(|e| warn!(agent = %spec.name, error = %e, "add_agent rejected"))?;
        let name = spec.name.clone();
        let id = self
            .roster
            .add(spec)
            .inspect_err(|e| warn!(agent = %name, error = %e, "add_agent rejected"))?;
        self.mobility.register(id);
        info!(%id, agent = %name, "agent added");
        Ok(id)
    }

    /// Remove an agent, discarding any journey in progress.
    ///
    /// Rooms it owns keep their owner: ids are never reused, so such a room
    /// simply becomes inaccessible until reassigned with
    /// [`set_owner`](Self::set_owner).
    pub fn remove_agent(&mut self, id: AgentId) -> SimResult<Agent> {
        let agent = self
            .roster
            .remove(id)
            .inspect_err(|e| warn!(%id, error = %e, "remove_agent rejected"))?;
        self.mobility.unregister(id);
        info!(%id, agent = %agent.name, "agent removed");
        Ok(agent)
    }

    /// Deactivating freezes any journey in place; reactivating resumes it.
    pub fn set_active(&mut self, id: AgentId, active: bool) -> SimResult<()> {
        self.roster
            .set_active(id, active)
            .inspect_err(|e| warn!(%id, error = %e, "set_active rejected"))?;
        info!(%id, active, "agent activity changed");
        Ok(())
    }

    pub fn set_diversion_eligible(&mut self, id: AgentId, eligible: bool) -> SimResult<()> {
        self.roster
            .set_diversion_eligible(id, eligible)
            .inspect_err(|e| warn!(%id, error = %e, "set_diversion_eligible rejected"))?;
        info!(%id, eligible, "diversion eligibility changed");
        Ok(())
    }

    /// Assign or clear a private room's owner.  The owner must be in the
    /// roster.  Journeys already in progress keep their installed path.
    pub fn set_owner(&mut self, location: LocationId, owner: Option<AgentId>) -> SimResult<()> {
        if let Some(agent) = owner {
            self.roster
                .get(agent)
                .inspect_err(|e| warn!(%location, error = %e, "set_owner rejected"))?;
        }
        self.graph
            .set_owner(location, owner)
            .inspect_err(|e| warn!(%location, error = %e, "set_owner rejected"))?;
        info!(%location, ?owner, "owner changed");
        Ok(())
    }

    pub fn set_locked(&mut self, location: LocationId, locked: bool) -> SimResult<()> {
        self.graph
            .set_locked(location, locked)
            .inspect_err(|e| warn!(%location, error = %e, "set_locked rejected"))?;
        info!(%location, locked, "lock changed");
        Ok(())
    }

    /// Ask `agent` to travel to `destination`.  The journey advances on the
    /// agent's subsequent selected ticks.
    pub fn request_move(&mut self, agent: AgentId, destination: LocationId) -> SimResult<MoveOutcome> {
        let from = self.roster.get(agent)?.location;
        let outcome = self
            .mobility
            .request_move(agent, from, destination, &self.graph)
            .inspect_err(|e| warn!(%agent, %destination, error = %e, "request_move rejected"))?;
        info!(%agent, %destination, ?outcome, "move requested");
        Ok(outcome)
    }
}
