//! Orbit Spawn headless runner
//!
//! Loads a config (or the defaults), plays a scripted run at the fixed
//! timestep and logs what the spawn director did.
//!
//! Usage: `orbit-spawn [config.json] [seconds]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use orbit_spawn::Config;
    use orbit_spawn::consts::SIM_DT;
    use orbit_spawn::sim::{CategoryId, GameEvent, GameState, TickInput, tick};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::load(&path).with_context(|| format!("loading {path}"))?,
        None => {
            log::info!("No config given, using defaults");
            Config::default()
        }
    };
    let seconds: f32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid duration {s:?}"))?,
        None => 60.0,
    };

    let mut state = GameState::new(&config).context("building spawn director")?;
    log::info!(
        "Run seed {:#x}: {} bodies placed, max initial field {}",
        state.seed,
        state.director.registry().len(),
        state.director.max_initial_count()
    );

    let steps = (seconds / SIM_DT).ceil() as u64;
    let mut spawned = 0u32;
    let mut skipped = 0u32;
    for step in 0..steps {
        // Scripted weave between lanes
        let input = TickInput {
            steer: (step as f32 * SIM_DT * 0.7).sin(),
            ..Default::default()
        };
        for event in tick(&mut state, &input, SIM_DT) {
            match event {
                GameEvent::Collected { kind, value } => {
                    log::info!("Collected {} (+{})", kind.as_str(), value)
                }
                GameEvent::Crashed { pos } => log::info!("Crashed at {:?}", pos),
                GameEvent::Spawned { .. } => spawned += 1,
                GameEvent::SpawnSkipped { .. } => skipped += 1,
            }
        }
        if state.is_over() {
            break;
        }
    }

    log::info!(
        "Run ended after {:.1}s ({:?}): {} timed spawns, {} skipped",
        state.survival_time,
        state.phase,
        spawned,
        skipped
    );
    for (i, category) in state.director.categories().iter().enumerate() {
        if let Some(stats) = state.director.pool_stats(CategoryId(i as u16)) {
            log::info!(
                "  {:<10} weight {:>3}  free {:>3}/{:<3} live {}",
                category.name,
                category.weight,
                stats.free,
                stats.capacity,
                stats.in_use
            );
        }
    }
    let harvest = &state.harvest;
    log::info!(
        "Harvest: score {}, food {} ({} carrots, {} cabbages), coins {}",
        harvest.score,
        harvest.food,
        harvest.carrots,
        harvest.cabbages,
        harvest.coins
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on wasm32; the host game drives the simulation
}
