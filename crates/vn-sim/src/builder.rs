//! Fluent builder for constructing a [`Sim`].

use vn_agent::{AgentSpec, Roster};
use vn_behavior::TurnModel;
use vn_core::{RandomSource, SimConfig, SimRng};
use vn_mobility::MobilityEngine;
use vn_schedule::{DiversionPolicy, SelectorConfig, TickScheduler};
use vn_spatial::{LocationGraph, LocationGraphBuilder, LocationSpec, Router};

use crate::config::VenueConfig;
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<T, R>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed and tick budget
/// - [`LocationGraph`]: the venue
/// - `T: TurnModel`: what idle agents do with their turn
/// - `R: Router`: the routing algorithm (e.g. [`vn_spatial::BfsRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                           |
/// |-----------------|-----------------------------------|
/// | `.roster(r)`    | Empty roster                      |
/// | `.selector(c)`  | `SelectorConfig::default()`       |
/// | `.diversion(p)` | No diversions                     |
/// | `.rng(r)`       | `SimRng::new(config.seed)`        |
///
/// # Example
///
/// ```rust,ignore
/// let config = load_config_json(Path::new("venue.json"))?;
/// let mut sim = SimBuilder::from_config(&config, NoopTurns, BfsRouter::new())?
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<T: TurnModel, R: Router> {
    config:    SimConfig,
    graph:     LocationGraph,
    roster:    Roster,
    selector:  SelectorConfig,
    diversion: Option<DiversionPolicy>,
    rng:       Option<Box<dyn RandomSource>>,
    turns:     T,
    router:    R,
}

impl<T: TurnModel, R: Router> SimBuilder<T, R> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, graph: LocationGraph, turns: T, router: R) -> Self {
        Self {
            config,
            graph,
            roster:    Roster::new(),
            selector:  SelectorConfig::default(),
            diversion: None,
            rng:       None,
            turns,
            router,
        }
    }

    /// Resolve a [`VenueConfig`] into a graph, roster, scheduler settings and
    /// diversion policy.
    ///
    /// The graph is built first without owners, then the roster, then owners
    /// are assigned by agent name through the graph's mutation API, so an
    /// owner on a public location fails with `NotPrivateRoom`.
    pub fn from_config(venue: &VenueConfig, turns: T, router: R) -> SimResult<Self> {
        let mut b = LocationGraphBuilder::new();
        for (name, loc) in &venue.locations {
            let mut spec = LocationSpec::new(name.as_str(), loc.floor).describe(loc.description.as_str());
            spec.staff_only = loc.staff_only;
            spec.is_private_room = loc.is_private_room;
            spec.locked = loc.locked;
            spec.connections = loc.connections.clone();
            b.add_location(spec);
        }
        let mut graph = b.build()?;

        let mut roster = Roster::new();
        for agent in &venue.agents {
            let home = graph.id_of(&agent.home)?;
            let mut spec = AgentSpec::new(agent.name.as_str(), home);
            spec.active = agent.active;
            spec.diversion_eligible = agent.diversion_eligible;
            roster.add(spec)?;
        }

        for (name, loc) in &venue.locations {
            if let Some(owner) = &loc.owner {
                let location = graph.id_of(name)?;
                graph.set_owner(location, Some(roster.id_of(owner)?))?;
            }
        }

        let diversion = venue
            .diversion
            .as_ref()
            .map(|d| -> SimResult<DiversionPolicy> {
                let destination = graph.id_of(&d.destination)?;
                Ok(DiversionPolicy::new(d.interval_ticks, d.probability, destination)?)
            })
            .transpose()?;

        let mut builder = Self::new(SimConfig::from(&venue.sim), graph, turns, router)
            .roster(roster)
            .selector(SelectorConfig::from(&venue.scheduler));
        builder.diversion = diversion;
        Ok(builder)
    }

    /// Supply a pre-populated roster.  Every agent's location must exist in
    /// the graph; this is checked in [`build`](Self::build).
    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = roster;
        self
    }

    pub fn selector(mut self, selector: SelectorConfig) -> Self {
        self.selector = selector;
        self
    }

    pub fn diversion(mut self, policy: DiversionPolicy) -> Self {
        self.diversion = Some(policy);
        self
    }

    /// Replace the seeded RNG, e.g. with a scripted source in tests.
    pub fn rng(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs, register every agent with the mobility engine, and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<T, R>> {
        for agent in self.roster.iter() {
            if self.graph.location(agent.location).is_err() {
                return Err(SimError::Config(format!(
                    "agent {:?} starts at unknown location {}",
                    agent.name, agent.location
                )));
            }
        }
        // The policy fields are public; repeat the constructor checks.
        let diversion = self
            .diversion
            .map(|p| DiversionPolicy::new(p.interval_ticks, p.probability, p.destination))
            .transpose()?;
        if let Some(policy) = &diversion {
            self.graph.location(policy.destination)?;
        }

        let scheduler = TickScheduler::new(self.selector)?;

        let mut mobility = MobilityEngine::new(self.router);
        for agent in self.roster.iter() {
            mobility.register(agent.id);
        }

        let seed = self.config.seed;
        let rng = self
            .rng
            .unwrap_or_else(|| Box::new(SimRng::new(seed)) as Box<dyn RandomSource>);

        Ok(Sim {
            config:    self.config,
            graph:     self.graph,
            roster:    self.roster,
            mobility,
            scheduler,
            diversion,
            turns:     self.turns,
            rng,
        })
    }
}
