use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};
use grid_smoke::{
    ascii_frame, step_in_place, Config, FrameStats, SimWorkspace, DEFAULT_CONFIG_PATH,
};

fn get_args() -> ArgMatches {
    clap::command!()
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("YAML config file")
                .value_parser(clap::value_parser!(PathBuf))
                .default_value(DEFAULT_CONFIG_PATH),
        )
        .arg(
            Arg::new("frames")
                .short('f')
                .long("frames")
                .value_name("N")
                .help("Frames to simulate (0 = until stopped)")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("fixed_dt")
                .long("fixed-dt")
                .value_name("SECONDS")
                .help("Use a fixed time step instead of wall-clock frame time")
                .value_parser(clap::value_parser!(f32)),
        )
        .arg(
            Arg::new("preview_every")
                .short('p')
                .long("preview-every")
                .value_name("N")
                .help("Print the density field every N frames (0 = never)")
                .value_parser(clap::value_parser!(u64)),
        )
        .get_matches()
}

fn load_config(matches: &ArgMatches) -> Result<Config> {
    let path = matches
        .get_one::<PathBuf>("config")
        .context("missing config path")?;
    let mut config =
        Config::load(path).with_context(|| format!("loading {}", path.display()))?;
    if let Some(frames) = matches.get_one::<u64>("frames") {
        config.display.frames = *frames;
    }
    if let Some(dt) = matches.get_one::<f32>("fixed_dt") {
        config.display.fixed_dt = Some(*dt);
    }
    if let Some(every) = matches.get_one::<u64>("preview_every") {
        config.display.preview_every = *every;
    }
    config.validate().context("command-line overrides")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let matches = get_args();
    let config = load_config(&matches)?;

    let mut state = config.initial_state();
    let mut scratch = SimWorkspace::new(state.grid());
    let initial = FrameStats::measure(&state);
    let frame_budget = Duration::from_secs_f32(config.frame_dt());
    log::info!(
        "grid {n}x{n}, seed mass {:.3}, {} pressure iterations",
        initial.mass,
        config.physics.pressure_iters,
        n = config.physics.size,
    );

    let mut dt = config.display.fixed_dt.unwrap_or_else(|| config.frame_dt());
    let mut last_frame = Instant::now();
    let mut frame: u64 = 0;
    let mut peak_speed: f32 = 0.0;
    while config.display.frames == 0 || frame < config.display.frames {
        let params = config.sim_params(dt);
        step_in_place(&mut state, params, &mut scratch);
        frame += 1;

        let stats = FrameStats::measure(&state);
        peak_speed = peak_speed.max(stats.max_speed);
        log::debug!(
            "frame {frame}: dt {dt:.4} mass {:.4} max speed {:.3} divergence {:.4}",
            stats.mass,
            stats.max_speed,
            stats.divergence,
        );
        if !stats.mass.is_finite() {
            log::warn!("density became non-finite at frame {frame}");
        }
        let every = config.display.preview_every;
        if every > 0 && frame % every == 0 {
            println!("frame {frame}\n{}", ascii_frame(&state.density));
        }

        let elapsed = last_frame.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
        let now = Instant::now();
        if config.display.fixed_dt.is_none() {
            dt = now.duration_since(last_frame).as_secs_f32();
        }
        last_frame = now;
    }

    let last = FrameStats::measure(&state);
    log::info!(
        "{frame} frames, mass {:.4} (drift {:+.3}%), peak speed {:.3}",
        last.mass,
        last.mass_drift(&initial) * 100.0,
        peak_speed,
    );
    Ok(())
}
