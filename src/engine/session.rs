//! Session lifecycle: Idle → Running → (Paused ⇄ Running) → Completed
//!
//! `start` while already Running is a full reset, not a no-op: the clock is
//! invalidated before any item reference is released, so a stale granule
//! can never spawn into a torn-down registry. Completion fires exactly once
//! per session, and the phase transition lands before the event becomes
//! visible to the host.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::engine::events::RainEvent;
use crate::engine::host::AnimationHost;
use crate::engine::state::{RainState, RainStats, SessionPhase};

/// Begin (or restart) a session at `now`
pub fn start(state: &mut RainState, host: &mut dyn AnimationHost, now: f64) {
    if state.phase == SessionPhase::Running || state.phase == SessionPhase::Paused {
        log::info!("restarting rain session (was {:?})", state.phase);
    }
    // Invalidate the clock first, then release residual items
    state.ticker.disarm();
    state.clear_items(host);

    state.stats = RainStats::default();
    state.elapsed_granules = 0;
    state.interval_accum = 0;
    state.rng = Pcg32::seed_from_u64(state.seed);
    state.phase = SessionPhase::Running;
    state.ticker.arm(now);
    log::info!(
        "rain session started: interval={:.3}s drop={:.1}s total={:.1}s density={}",
        state.config.effective_interval(),
        state.config.drop_duration,
        state.config.total_duration,
        state.config.hazard_density
    );
}

/// Freeze the clock and every live item's motion. No-op unless Running.
pub fn pause(state: &mut RainState, host: &mut dyn AnimationHost, now: f64) {
    if state.phase != SessionPhase::Running {
        return;
    }
    state.ticker.disarm();
    for item in &mut state.items {
        item.clock.pause(now);
        host.pause_visual(item.visual);
    }
    state.phase = SessionPhase::Paused;
    log::info!(
        "rain session paused at {:.2}s run time",
        state.elapsed_run_time()
    );
}

/// Continue a paused session. No-op unless Paused.
pub fn resume(state: &mut RainState, host: &mut dyn AnimationHost, now: f64) {
    if state.phase != SessionPhase::Paused {
        return;
    }
    for item in &mut state.items {
        item.clock.resume(now);
        host.resume_visual(item.visual);
    }
    state.phase = SessionPhase::Running;
    state.ticker.arm(now);
    log::info!("rain session resumed");
}

/// Stop a running or paused session. Safe in any phase; completion is
/// reported at most once per session.
pub fn stop(state: &mut RainState, host: &mut dyn AnimationHost) {
    if state.phase == SessionPhase::Running || state.phase == SessionPhase::Paused {
        complete(state, host);
    }
}

/// Shared termination path for `stop` and natural budget expiry
pub(crate) fn complete(state: &mut RainState, host: &mut dyn AnimationHost) {
    state.ticker.disarm();
    state.clear_items(host);
    state.phase = SessionPhase::Completed;
    state.events.push_back(RainEvent::SessionCompleted);
    log::info!(
        "rain session completed: primary {}/{} clicked, hazard {}/{} clicked",
        state.stats.primary_clicked,
        state.stats.primary_spawned,
        state.stats.hazard_clicked,
        state.stats.hazard_spawned
    );
}
