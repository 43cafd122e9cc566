//! Reward Rain demo driver
//!
//! Runs a headless session against `HeadlessHost`, taps the topmost falling
//! item on a fixed cadence, and prints the event stream plus a JSON stats
//! summary. Pass a JSON config path to override the demo defaults.

use glam::Vec2;

use reward_rain::config::RainConfig;
use reward_rain::consts::TICK_GRANULARITY;
use reward_rain::engine::{self, HeadlessHost, RainEvent, RainState, SessionPhase};

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(err) => {
                log::error!("failed to load {}: {}", path, err);
                std::process::exit(1);
            }
        },
        None => demo_config(),
    };

    let mut state = RainState::new(config, 0xDECAF);
    let mut host = HeadlessHost::new();

    engine::start(&mut state, &mut host, 0.0);

    let mut now = 0.0;
    let mut next_tap = 0.25;
    while state.phase != SessionPhase::Completed {
        now += TICK_GRANULARITY;
        engine::advance(&mut state, &mut host, now);

        // Tap the center of the topmost unconsumed item every quarter second
        if now >= next_tap {
            next_tap += 0.25;
            let target = state
                .live_items()
                .iter()
                .rev()
                .find(|item| !item.consumed)
                .map(|item| {
                    let bounds = item.bounds(now);
                    bounds.origin + bounds.size / 2.0
                });
            if let Some(point) = target {
                let outcome = engine::on_tap(&mut state, point, now);
                log::debug!("tap at ({:.0}, {:.0}) -> {:?}", point.x, point.y, outcome);
            }
        }

        for event in state.drain_events() {
            report(event, now);
        }
    }

    let summary = serde_json::to_string_pretty(&state.stats).expect("stats are serializable");
    println!("{}", summary);
}

fn demo_config() -> RainConfig {
    RainConfig {
        viewport: Vec2::new(400.0, 800.0),
        spawn_interval: 0.2,
        drop_duration: 1.5,
        total_duration: 3.0,
        hazard_density: 4,
        ..RainConfig::default()
    }
}

fn load_config(path: &str) -> Result<RainConfig, Box<dyn std::error::Error>> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn report(event: RainEvent, now: f64) {
    match event {
        RainEvent::ItemAppeared { category, ordinal } => {
            log::info!("[{:.2}s] {:?} #{} appeared", now, category, ordinal);
        }
        RainEvent::ItemClicked { category, visual } => {
            log::info!("[{:.2}s] {:?} {:?} clicked", now, category, visual);
        }
        RainEvent::SessionCompleted => {
            log::info!("[{:.2}s] session completed", now);
        }
    }
}
