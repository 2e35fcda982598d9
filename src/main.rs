//! Astro Dodge headless demo
//!
//! Runs the full game loop against the headless engine with scripted input,
//! which makes it handy for balance tuning: feed it a tuning JSON and a seed
//! and watch how long the scripted pilot survives.
//!
//! Usage: astro-dodge [--seed N] [--secs N] [--tuning FILE]

use std::error::Error;

use astro_dodge::consts::SIM_DT;
use astro_dodge::{
    GameController, HeadlessEngine, Key, LogDisplay, ManualScheduler, Tuning,
};

struct Args {
    seed: u64,
    secs: f32,
    tuning: Tuning,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args {
        seed: 42,
        secs: 60.0,
        tuning: Tuning::default(),
    };
    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        match flag.as_str() {
            "--seed" => args.seed = value.parse()?,
            "--secs" => args.secs = value.parse()?,
            "--tuning" => {
                let json = std::fs::read_to_string(&value)?;
                args.tuning = Tuning::from_json(&json)?;
            }
            other => return Err(format!("unknown flag {other}").into()),
        }
    }
    Ok(args)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = parse_args()?;

    let mut controller = GameController::new(
        HeadlessEngine::new(),
        LogDisplay::default(),
        ManualScheduler::new(),
        args.tuning,
        args.seed,
    );

    let max_ticks = (args.secs / SIM_DT) as u64;
    let mut ticks = 0u64;
    while ticks < max_ticks && controller.scheduler_mut().take() {
        // Scripted pilot: drift left for a second, then right, repeat
        let phase_secs = (ticks as f32 * SIM_DT) as u64 % 2;
        if phase_secs == 0 {
            controller.key_up(Key::Right);
            controller.key_down(Key::Left);
        } else {
            controller.key_up(Key::Left);
            controller.key_down(Key::Right);
        }

        controller.tick()?;
        ticks += 1;
    }

    let session = controller.session();
    if session.is_game_over() {
        log::info!(
            "run ended by collision after {:.1}s, score {}",
            session.elapsed_secs(),
            session.score
        );
    } else {
        log::info!(
            "survived {:.1}s, score {}, {} asteroids on screen",
            session.elapsed_secs(),
            session.score,
            controller.asteroids().len()
        );
    }

    controller.destroy();
    Ok(())
}
