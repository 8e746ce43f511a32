//! Cell Arena entry point
//!
//! Runs the simulation headless: the frame loop, pacing and logging are
//! real, while drawing is replaced by periodic HUD logging.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use cell_arena::app::{App, Control};
use cell_arena::platform::{FrameClock, autopilot_input};
use cell_arena::renderer::hud::{banners, hud_lines};
use cell_arena::settings::{ConfigError, Settings};
use cell_arena::sim::TickInput;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Settings JSON file (defaults are used for missing fields)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the world seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many frames
    #[arg(short, long, default_value_t = 1800)]
    frames: u64,

    /// Let the demo autopilot steer the player
    #[arg(short, long)]
    autopilot: bool,

    /// Run as fast as possible instead of at the configured fps
    #[arg(long)]
    unpaced: bool,

    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Print the final render snapshot as JSON
    #[arg(long)]
    snapshot_json: bool,
}

fn load_settings(args: &Args) -> Result<Settings, ConfigError> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    Ok(settings)
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    };

    if args.print_config {
        match settings.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("{e}");
                process::exit(1);
            }
        }
        return;
    }

    log::info!("Cell Arena (headless) starting with seed {}", settings.seed);

    let fps = settings.fps;
    let clock = if args.unpaced {
        FrameClock::unpaced(fps)
    } else {
        FrameClock::new(fps)
    };
    let mut app = match App::with_clock(settings, clock) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    };

    // Keep presenting for two seconds after the run ends, as a window would
    let grace = u64::from(fps) * 2;
    let mut ended_at: Option<u64> = None;
    let mut last = None;

    app.run(
        |state, frame| {
            if frame >= args.frames {
                return Control::Quit;
            }
            if state.is_terminal() {
                let ended = *ended_at.get_or_insert(frame);
                if frame - ended >= grace {
                    return Control::Quit;
                }
            }
            let input = if args.autopilot {
                autopilot_input(state)
            } else {
                TickInput::default()
            };
            Control::Continue(input)
        },
        |snapshot, viewport| {
            if snapshot.tick % u64::from(fps) == 0 && !snapshot.won && !snapshot.lost {
                let stats: Vec<_> = hud_lines(snapshot, viewport)
                    .into_iter()
                    .map(|l| l.text)
                    .collect();
                log::info!(
                    "tick {} | {} | {} visible disks",
                    snapshot.tick,
                    stats.join(" | "),
                    snapshot.instances(viewport).len()
                );
            }
            last = Some(snapshot.clone());
        },
    );

    let Some(snapshot) = last else {
        log::warn!("No frames were rendered");
        return;
    };

    for banner in banners(&snapshot) {
        log::info!("{banner}");
    }
    log::info!(
        "Finished at tick {} with mass {:.0} / {:.0}",
        snapshot.tick,
        snapshot.player_mass,
        snapshot.win_mass
    );

    if args.snapshot_json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Failed to serialize snapshot: {e}");
                process::exit(1);
            }
        }
    }
}
