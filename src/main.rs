//! Starfield Pong headless runner
//!
//! Drives the simulation without a window: a scripted stand-in presses the
//! player's keys, sounds go to the log and frames can be dumped as JSON lines.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use starfield_pong::audio::{AudioSink, LogAudioSink};
use starfield_pong::platform::{Clock, FixedStepClock, SystemClock};
use starfield_pong::sim::{Direction, Session, TickInput, opponent_intent, tick};
use starfield_pong::{ConfigError, Settings};

#[derive(Parser)]
#[command(about, long_about = None)]
struct Cli {
    /// Path to a JSON settings file.
    #[arg(long, short, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, short, default_value = "3600")]
    frames: u64,

    /// RNG seed, overriding the settings file.
    #[arg(long, short)]
    seed: Option<u64>,

    /// Pace frames at 60 Hz against the wall clock instead of simulated time.
    #[arg(long)]
    realtime: bool,

    /// How the player's paddle is driven.
    #[arg(value_enum, long, default_value_t)]
    human: HumanPolicy,

    /// Print every frame as a JSON line on stdout.
    #[arg(long)]
    dump_frames: bool,
}

/// Scripted stand-in for the keyboard
#[derive(Clone, Copy, Default, ValueEnum)]
enum HumanPolicy {
    /// Never press anything
    #[default]
    Idle,
    /// Follow the ball the same way the opponent does
    Track,
}

#[derive(thiserror::Error, Debug)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to encode frame : {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write frame : {0}")]
    Io(#[from] io::Error),
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), RunError> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    let field = settings.validate()?;
    let seed = settings.seed.unwrap_or_else(rand::random);

    let mut clock: Box<dyn Clock> = if cli.realtime {
        Box::new(SystemClock::new())
    } else {
        Box::new(FixedStepClock::default())
    };
    let mut audio = LogAudioSink::new(settings.muted);
    audio.start_music();

    let mut session =
        Session::new(field, seed, clock.now_secs()).with_starfield(settings.starfield);
    log::info!(
        "Starfield Pong starting (seed {}, {} frames, field {}x{})",
        session.seed,
        cli.frames,
        field.width,
        field.height
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for _ in 0..cli.frames {
        let input = human_input(cli.human, &session);
        let mut frame = tick(&mut session, &input, clock.now_secs());
        frame.apply_settings(&settings);

        audio.play_all(&frame.sounds);
        if cli.dump_frames {
            serde_json::to_writer(&mut out, &frame)?;
            writeln!(out)?;
        }

        clock.end_frame();
    }
    out.flush()?;

    let (player, opponent) = session.scores();
    log::info!(
        "Final score after {} frames: player {player} - opponent {opponent} ({} sounds)",
        session.frame,
        audio.played()
    );
    Ok(())
}

fn human_input(policy: HumanPolicy, session: &Session) -> TickInput {
    match policy {
        HumanPolicy::Idle => TickInput::default(),
        HumanPolicy::Track => match opponent_intent(&session.player, &session.ball) {
            Some(Direction::Up) => TickInput { up: true, down: false },
            Some(Direction::Down) => TickInput { up: false, down: true },
            None => TickInput::default(),
        },
    }
}
