use super::{contacts, motion, triggers, PerfTimer, PhysicsCore};

/// One tick: move every enabled body, then resolve body pairs, then scan
/// trigger tiles against the final positions.
pub(super) fn update(world: &mut PhysicsCore, dt: f32) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.objects.len() as u32;
        world.perf_stats.grid_count = world.grids.len() as u32;
    }
    let step_start = PerfTimer::start_if(perf_on);

    world.events.clear();

    // === MOTION: flags, gravity, integration, tiles, bounds ===
    let t0 = PerfTimer::start_if(perf_on);
    let simulated = motion::move_bodies(world, dt);
    if let Some(t0) = t0 {
        world.perf_stats.motion_ms = t0.elapsed_ms();
    }

    // === BODY PAIRS: push-out against solids, report the rest ===
    let t0 = PerfTimer::start_if(perf_on);
    let push_outs = contacts::resolve_pairs(world);
    if let Some(t0) = t0 {
        world.perf_stats.contacts_ms = t0.elapsed_ms();
    }

    // === TILE TRIGGERS: after all displacement is final ===
    let t0 = PerfTimer::start_if(perf_on);
    triggers::scan_triggers(world);
    if let Some(t0) = t0 {
        world.perf_stats.triggers_ms = t0.elapsed_ms();
    }

    if let Some(step_start) = step_start {
        world.perf_stats.step_ms = step_start.elapsed_ms();
        world.perf_stats.bodies_simulated = simulated;
        world.perf_stats.push_outs = push_outs;
        world.perf_stats.pairs_reported = world.events.pairs().len() as u32;
        world.perf_stats.trigger_events = world.events.tile_triggers().len() as u32;
    }

    world.frame += 1;
}
