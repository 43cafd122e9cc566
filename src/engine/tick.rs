//! Spawn scheduling
//!
//! One granule of work: sweep exited items first, then decide whether this
//! granule completes a spawn interval. Spawn order within a granule is
//! Primary before Hazard, which also fixes their relative z-order (the
//! later spawn sits on top).

use crate::engine::host::AnimationHost;
use crate::engine::session;
use crate::engine::state::{ItemCategory, RainState, SessionPhase};

/// Drive the engine up to `now`, running every whole granule that elapsed
pub fn advance(state: &mut RainState, host: &mut dyn AnimationHost, now: f64) {
    let granules = state.ticker.advance(now);
    for _ in 0..granules {
        tick(state, host, now);
        if state.phase != SessionPhase::Running {
            break;
        }
    }
}

/// One fixed granule of scheduling
pub fn tick(state: &mut RainState, host: &mut dyn AnimationHost, now: f64) {
    if state.phase != SessionPhase::Running {
        return;
    }

    // Sweep precedes any spawn within a granule
    state.retire_exited(host, now);

    state.interval_accum += 1;
    let interval = state.config.interval_granules();
    if state.interval_accum < interval {
        return;
    }
    state.interval_accum = 0;

    // Book one full interval of run time. The budget is checked before any
    // spawn, so a session never spawns past its total duration; landing
    // exactly on the budget still spawns, then completes in the same
    // granule.
    let total = state.config.total_granules();
    if state.elapsed_granules + interval > total {
        state.elapsed_granules = total;
        session::complete(state, host);
        return;
    }
    state.elapsed_granules += interval;

    state.spawn_item(host, ItemCategory::Primary, now);
    let density = state.config.hazard_density;
    if density > 0 && state.stats.primary_spawned % density == 0 {
        state.spawn_item(host, ItemCategory::Hazard, now);
    }

    if state.elapsed_granules >= total {
        session::complete(state, host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RainConfig;
    use crate::consts::TICK_GRANULARITY;
    use crate::engine::events::RainEvent;
    use crate::engine::host::HeadlessHost;

    fn engine(config: RainConfig) -> (RainState, HeadlessHost) {
        (RainState::new(config, 12345), HeadlessHost::new())
    }

    /// Step the engine granule by granule from its current time to `until`
    fn run_to(state: &mut RainState, host: &mut HeadlessHost, from: f64, until: f64) {
        let steps = ((until - from) / TICK_GRANULARITY).round() as u64;
        for step in 1..=steps {
            let now = from + step as f64 * TICK_GRANULARITY;
            advance(state, host, now);
        }
    }

    #[test]
    fn test_spawn_schedule_end_to_end() {
        // 0.5s cadence over a 2s budget: four spawn events, completion on
        // the last one, nothing left alive afterwards
        let (mut state, mut host) = engine(RainConfig {
            spawn_interval: 0.5,
            drop_duration: 5.0,
            total_duration: 2.0,
            ..RainConfig::default()
        });
        session::start(&mut state, &mut host, 0.0);

        run_to(&mut state, &mut host, 0.0, 0.49);
        assert_eq!(state.stats.primary_spawned, 0);

        run_to(&mut state, &mut host, 0.49, 0.5);
        assert_eq!(state.stats.primary_spawned, 1);

        run_to(&mut state, &mut host, 0.5, 1.99);
        assert_eq!(state.stats.primary_spawned, 3);

        run_to(&mut state, &mut host, 1.99, 2.0);
        assert_eq!(state.stats.primary_spawned, 4);
        assert_eq!(state.phase, SessionPhase::Completed);
        assert!((state.elapsed_run_time() - 2.0).abs() < 1e-9);
        assert!(state.live_items().is_empty());
        assert_eq!(host.live_count(), 0);

        let events: Vec<_> = state.drain_events().collect();
        assert_eq!(events.len(), 5);
        assert_eq!(events[4], RainEvent::SessionCompleted);
        assert_eq!(
            events[0],
            RainEvent::ItemAppeared {
                category: ItemCategory::Primary,
                ordinal: 1
            }
        );
    }

    #[test]
    fn test_budget_not_divisible_by_interval() {
        // floor(1.8 / 0.5) = 3 spawns; the fourth interval overshoots the
        // budget and only completes the session
        let (mut state, mut host) = engine(RainConfig {
            spawn_interval: 0.5,
            total_duration: 1.8,
            ..RainConfig::default()
        });
        session::start(&mut state, &mut host, 0.0);
        run_to(&mut state, &mut host, 0.0, 2.5);

        assert_eq!(state.stats.primary_spawned, 3);
        assert_eq!(state.phase, SessionPhase::Completed);
        assert!(state.elapsed_run_time() <= 1.8 + 1e-9);
    }

    #[test]
    fn test_sub_granularity_interval_runs_at_granularity() {
        let (mut state, mut host) = engine(RainConfig {
            spawn_interval: 0.003,
            total_duration: 30.0,
            ..RainConfig::default()
        });
        session::start(&mut state, &mut host, 0.0);
        run_to(&mut state, &mut host, 0.0, 0.1);
        // One spawn per granule once the interval is floored
        assert_eq!(state.stats.primary_spawned, 10);
    }

    #[test]
    fn test_hazard_density_gates_spawns() {
        let (mut state, mut host) = engine(RainConfig {
            spawn_interval: 0.1,
            total_duration: 30.0,
            hazard_density: 3,
            ..RainConfig::default()
        });
        session::start(&mut state, &mut host, 0.0);

        run_to(&mut state, &mut host, 0.0, 0.9);
        assert_eq!(state.stats.primary_spawned, 9);
        assert_eq!(state.stats.hazard_spawned, 3);

        // Hazards appear exactly on the 3rd, 6th, 9th primary
        let hazard_after: Vec<_> = state
            .live_items()
            .iter()
            .enumerate()
            .filter(|(_, item)| item.category == ItemCategory::Hazard)
            .map(|(idx, _)| state.live_items()[idx - 1].ordinal)
            .collect();
        assert_eq!(hazard_after, vec![3, 6, 9]);
    }

    #[test]
    fn test_hazard_disabled_at_zero_density() {
        let (mut state, mut host) = engine(RainConfig {
            spawn_interval: 0.05,
            total_duration: 2.0,
            hazard_density: 0,
            ..RainConfig::default()
        });
        session::start(&mut state, &mut host, 0.0);
        run_to(&mut state, &mut host, 0.0, 2.5);
        assert!(state.stats.primary_spawned > 0);
        assert_eq!(state.stats.hazard_spawned, 0);
    }

    #[test]
    fn test_hazard_spawns_after_primary_in_same_granule() {
        let (mut state, mut host) = engine(RainConfig {
            spawn_interval: 0.5,
            total_duration: 30.0,
            hazard_density: 1,
            ..RainConfig::default()
        });
        session::start(&mut state, &mut host, 0.0);
        run_to(&mut state, &mut host, 0.0, 0.5);

        let categories: Vec<_> = state.live_items().iter().map(|i| i.category).collect();
        assert_eq!(categories, vec![ItemCategory::Primary, ItemCategory::Hazard]);
    }

    #[test]
    fn test_sweep_runs_before_spawn() {
        // With a traversal much shorter than the interval, each spawn event
        // finds the previous hazard already exited
        let (mut state, mut host) = engine(RainConfig {
            spawn_interval: 0.5,
            drop_duration: 0.1,
            total_duration: 30.0,
            hazard_density: 1,
            ..RainConfig::default()
        });
        session::start(&mut state, &mut host, 0.0);

        run_to(&mut state, &mut host, 0.0, 0.5);
        assert_eq!(host.live_by_category(ItemCategory::Hazard), 1);

        run_to(&mut state, &mut host, 0.5, 1.0);
        // First hazard swept, second just spawned; primaries rest below the
        // viewport and are kept until teardown
        assert_eq!(host.live_by_category(ItemCategory::Hazard), 1);
        assert_eq!(state.stats.hazard_spawned, 2);
        assert_eq!(host.live_by_category(ItemCategory::Primary), 2);
    }

    #[test]
    fn test_nothing_happens_while_paused() {
        let (mut state, mut host) = engine(RainConfig {
            spawn_interval: 0.1,
            total_duration: 30.0,
            ..RainConfig::default()
        });
        session::start(&mut state, &mut host, 0.0);
        run_to(&mut state, &mut host, 0.0, 0.25);
        assert_eq!(state.stats.primary_spawned, 2);

        session::pause(&mut state, &mut host, 0.25);
        run_to(&mut state, &mut host, 0.25, 3.0);
        assert_eq!(state.stats.primary_spawned, 2);

        // Sub-interval progress (0.05s into the third interval) is
        // preserved across the pause
        session::resume(&mut state, &mut host, 3.0);
        run_to(&mut state, &mut host, 3.0, 3.05);
        assert_eq!(state.stats.primary_spawned, 3);
    }

    #[test]
    fn test_catchup_in_one_call() {
        let (mut state, mut host) = engine(RainConfig {
            spawn_interval: 0.1,
            total_duration: 30.0,
            ..RainConfig::default()
        });
        session::start(&mut state, &mut host, 0.0);
        // A single late call replays the missed granules (within the stall
        // guard) and fires both pending spawn events
        advance(&mut state, &mut host, 0.2);
        assert_eq!(state.stats.primary_spawned, 2);
    }

    #[test]
    fn test_determinism_across_engines() {
        let config = RainConfig {
            spawn_interval: 0.1,
            hazard_density: 2,
            total_duration: 5.0,
            ..RainConfig::default()
        };
        let (mut a, mut host_a) = (RainState::new(config.clone(), 999), HeadlessHost::new());
        let (mut b, mut host_b) = (RainState::new(config, 999), HeadlessHost::new());

        session::start(&mut a, &mut host_a, 0.0);
        session::start(&mut b, &mut host_b, 0.0);
        run_to(&mut a, &mut host_a, 0.0, 2.0);
        run_to(&mut b, &mut host_b, 0.0, 2.0);

        assert_eq!(a.live_items().len(), b.live_items().len());
        for (left, right) in a.live_items().iter().zip(b.live_items()) {
            assert_eq!(left.path, right.path);
            assert_eq!(left.category, right.category);
        }
    }
}
