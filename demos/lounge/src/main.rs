//! lounge: a small office floor with a side terrace for breaks.
//!
//! Seven agents share two floors.  Everyone wanders between adjacent rooms on
//! their turn, the smokers step out to the side terrace every so often, and
//! private offices only admit their owner.  Halfway through, the demo uses
//! the administrative interface to hand an office to a new owner and send
//! someone home for the day.
//!
//! Pass a path to a JSON venue file to run something else:
//!
//! ```text
//! RUST_LOG=info cargo run -p lounge -- my_venue.json
//! ```

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};

use vn_behavior::{BehaviorError, BehaviorResult, TurnContext, TurnModel, TurnOutcome};
use vn_core::{RandomSource, SimRng, Tick};
use vn_mobility::MovementEvent;
use vn_output::{CsvEventWriter, EventLogObserver, OutputWriter};
use vn_sim::{SimBuilder, SimObserver, SimView, TickReport, VenueConfig, load_config_json, load_config_reader};
use vn_spatial::BfsRouter;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:       &str = "output/lounge";
const WANDER_CHANCE:    f64  = 0.35;
const CHAT_DROP_CHANCE: f64  = 0.05; // simulated chat sink outage

// ── Venue ─────────────────────────────────────────────────────────────────────

const VENUE_JSON: &str = r#"{
  "sim": { "seed": 2024, "totalTicks": 60 },
  "locations": {
    "reception":   { "floor": 1, "description": "Front desk and sofas.",
                     "connections": ["corridor"] },
    "corridor":    { "floor": 1, "description": "Long carpeted hallway.",
                     "connections": ["reception", "kitchen", "open_plan", "office_ada", "office_max", "side_door"] },
    "kitchen":     { "floor": 1, "description": "Coffee machine, always busy.",
                     "connections": ["corridor"] },
    "open_plan":   { "floor": 1, "description": "Rows of desks.",
                     "connections": ["corridor", "meeting_room"] },
    "meeting_room":{ "floor": 1, "staffOnly": true, "description": "Glass-walled.",
                     "connections": ["open_plan"] },
    "office_ada":  { "floor": 1, "isPrivateRoom": true, "owner": "ada",
                     "connections": ["corridor"] },
    "office_max":  { "floor": 1, "isPrivateRoom": true,
                     "connections": ["corridor"] },
    "side_door":   { "floor": 1, "connections": ["corridor", "terrace"] },
    "terrace":     { "floor": 1, "description": "Ashtrays and a view of the car park.",
                     "connections": ["side_door"] },
    "roof_garden": { "floor": 2, "connections": ["plant_room"] },
    "plant_room":  { "floor": 2, "staffOnly": true, "locked": true,
                     "connections": ["roof_garden"] }
  },
  "agents": [
    { "name": "ada",   "home": "office_ada" },
    { "name": "ben",   "home": "open_plan", "diversionEligible": true },
    { "name": "cleo",  "home": "open_plan" },
    { "name": "dev",   "home": "reception", "diversionEligible": true },
    { "name": "eli",   "home": "kitchen" },
    { "name": "fay",   "home": "open_plan", "diversionEligible": true },
    { "name": "gus",   "home": "roof_garden" }
  ],
  "scheduler": {
    "tiers": [ { "weight": 1, "share": 1.0 }, { "weight": 3, "share": 0.5 }, { "weight": 6, "share": 0.25 } ],
    "inclusionProbability": 0.7
  },
  "diversion": { "intervalTicks": 8, "probability": 0.5, "destination": "terrace" }
}"#;

// ── Turn model ────────────────────────────────────────────────────────────────

/// Says something about where it is, and sometimes drifts to a neighbouring
/// room.  Stands in for the text-generation collaborator.
struct Wanderer {
    rng:    SimRng,
    spoken: usize,
}

impl TurnModel for Wanderer {
    fn take_turn(&mut self, ctx: &TurnContext<'_>) -> BehaviorResult<TurnOutcome> {
        if self.rng.chance(CHAT_DROP_CHANCE) {
            return Err(BehaviorError::Collaborator("chat sink timed out".into()));
        }
        self.spoken += 1;
        info!(tick = %ctx.tick, agent = ctx.name, "{} looks around the {}", ctx.name, ctx.location_name);

        let exits = ctx.exits();
        if exits.is_empty() || !self.rng.chance(WANDER_CHANCE) {
            return Ok(TurnOutcome::Stay);
        }
        let pick = self.rng.gen_range(0..exits.len());
        Ok(TurnOutcome::MoveTo(exits[pick]))
    }
}

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:      EventLogObserver<W>,
    hops:       usize,
    arrivals:   usize,
    diversions: usize,
    ticks:      usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: EventLogObserver<W>) -> Self {
        Self { inner, hops: 0, arrivals: 0, diversions: 0, ticks: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_movement(&mut self, event: &MovementEvent, view: SimView<'_>) {
        if event.is_arrival() {
            self.arrivals += 1;
            info!(
                tick = %event.tick,
                "{} arrives at the {}",
                view.agent_name(event.agent),
                view.location_name(event.to)
            );
        } else {
            self.hops += 1;
        }
        self.inner.on_movement(event, view);
    }

    fn on_diversion(&mut self, tick: Tick, agent: vn_core::AgentId, destination: vn_core::LocationId) {
        self.diversions += 1;
        self.inner.on_diversion(tick, agent, destination);
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.inner.on_tick_end(report);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_venue() -> Result<VenueConfig> {
    match std::env::args().nth(1) {
        Some(path) => load_config_json(Path::new(&path)).with_context(|| format!("loading {path}")),
        None => Ok(load_config_reader(VENUE_JSON.as_bytes())?),
    }
}

fn main() -> Result<()> {
    init_tracing();

    // 1. Venue and roster.
    let venue = load_venue()?;
    println!("=== lounge: venue navigation demo ===");
    println!(
        "Locations: {}  |  Agents: {}  |  Ticks: {}  |  Seed: {}",
        venue.locations.len(),
        venue.agents.len(),
        venue.sim.total_ticks,
        venue.sim.seed
    );
    println!();

    // 2. Build sim.  The turn model gets its own stream so its draws do not
    //    shift the scheduler's.
    let mut seeder = SimRng::new(venue.sim.seed);
    let turns = Wanderer { rng: seeder.child(1), spoken: 0 };
    let mut sim = SimBuilder::from_config(&venue, turns, BfsRouter::new())?.build()?;

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvEventWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(EventLogObserver::new(writer));

    // 4. First half of the day.
    let t0 = Instant::now();
    let half = venue.sim.total_ticks / 2;
    sim.run_ticks(half, &mut obs)?;

    // 5. Between ticks: reshuffle offices and send someone home.
    if let (Ok(office), Ok(ben)) = (sim.location_id("office_max"), sim.agent_id("ben")) {
        sim.set_owner(office, Some(ben))?;
        let outcome = sim.request_move(ben, office)?;
        println!("T{half}: office_max handed to ben ({outcome:?})");
    }
    if let Ok(cleo) = sim.agent_id("cleo") {
        sim.set_active(cleo, false)?;
        println!("T{half}: cleo leaves for the day");
    }
    println!();

    // 6. Second half.
    let last = sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "output error");
        eprintln!("output error: {e}");
    }

    // 7. Summary.
    println!("Simulation complete at {last} in {:.3} s", elapsed.as_secs_f64());
    println!("  movement_events.csv : {} rows ({} hops, {} arrivals)", obs.hops + obs.arrivals, obs.hops, obs.arrivals);
    println!("  tick_summaries.csv  : {} rows", obs.ticks);
    println!("  diversions started  : {}", obs.diversions);
    println!("  turns spoken        : {}", sim.turns().spoken);
    println!();

    // 8. Final positions table.
    println!("{:<8} {:<8} {:<14} {:<14}", "Agent", "Active", "Location", "Heading to");
    println!("{}", "-".repeat(46));
    for agent in sim.roster().iter() {
        let heading = sim
            .movement(agent.id)?
            .destination()
            .map_or("-", |d| sim.graph().name(d).unwrap_or("?"));
        println!(
            "{:<8} {:<8} {:<14} {:<14}",
            agent.name,
            if agent.active { "yes" } else { "no" },
            sim.graph().name(agent.location)?,
            heading,
        );
    }

    Ok(())
}
