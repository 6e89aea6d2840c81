//! Interface Reaction headless driver
//!
//! Plays the part of the frame scheduler: builds a session from settings,
//! steps it once per frame, renders the scene into instance buffers and
//! reports the diagnostic readout.
//!
//! Usage: interface-reaction [--config FILE] [--frames N] [--every K] [--json]

use interface_reaction::renderer::{AtomInstance, SceneBuilder};
use interface_reaction::{Settings, Simulation};

struct Args {
    config: Option<String>,
    frames: u64,
    every: u64,
    json: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        config: None,
        frames: 600,
        every: 120,
        json: false,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => args.config = it.next(),
            "--frames" => {
                if let Some(n) = it.next().and_then(|v| v.parse().ok()) {
                    args.frames = n;
                }
            }
            "--every" => {
                if let Some(n) = it.next().and_then(|v| v.parse().ok()) {
                    args.every = n;
                }
            }
            "--json" => args.json = true,
            other => log::warn!("Ignoring unknown argument: {}", other),
        }
    }
    args
}

fn report(sim: &Simulation, settings: &Settings, json: bool) {
    let readout = sim.readout(&settings.tick_input(false));
    if json {
        match serde_json::to_string(&readout) {
            Ok(line) => println!("{line}"),
            Err(e) => log::error!("Could not serialize readout: {}", e),
        }
    } else {
        println!("{readout}\n");
    }
}

fn main() {
    env_logger::init();
    log::info!("Interface Reaction (headless) starting...");

    let args = parse_args();
    let settings = match &args.config {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    if let Err(e) = settings.validate() {
        log::error!("{}", e);
        std::process::exit(2);
    }

    let mut sim = Simulation::from_settings(&settings);
    let mut scene_builder = SceneBuilder::new();
    let input = settings.tick_input(false);
    let every = args.every.max(1);

    for frame in 1..=args.frames {
        let step = sim.tick(&input);
        if step.reactions > 0 {
            log::debug!("Frame {}: {} reaction(s)", frame, step.reactions);
        }

        let scene = scene_builder.build(sim.world(), settings.temperature_c, settings.show_atoms);
        if frame == args.frames {
            log::info!(
                "Last frame: {} atoms ({} bytes), {} bonds",
                scene.atoms.len(),
                AtomInstance::as_bytes(&scene.atoms).len(),
                scene.bonds.len()
            );
        }

        if settings.show_diagnostics && frame % every == 0 {
            report(&sim, &settings, args.json);
        }
    }

    report(&sim, &settings, args.json);
    log::info!("Done after {} frames (seed {})", args.frames, sim.seed());
}
