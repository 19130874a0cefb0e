//! Hitline headless runner
//!
//! Plays a beatmap against a simulated clock and prints the final tally.
//!
//! Usage: `hitline [BEATMAP.json] [--settings FILE] [--autoplay] [--mode NAME]`
//!
//! Without a beatmap a demo one is generated from the settings seed. Without
//! `--autoplay` a scripted perfect player provides the input.

use std::process::ExitCode;

use hitline::platform::headless::{ScriptedInput, SimulatedAudio};
use hitline::renderer::NullRenderer;
use hitline::settings::ModeKind;
use hitline::sim::Difficulty;
use hitline::{Beatmap, Game, Result, Settings, beatmap};

const DEFAULT_SETTINGS_PATH: &str = "hitline.json";

#[derive(Debug, Default)]
struct Args {
    beatmap: Option<String>,
    settings: Option<String>,
    autoplay: bool,
    mode: Option<ModeKind>,
}

fn parse_args() -> std::result::Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => {
                args.settings = Some(iter.next().ok_or("--settings needs a path")?);
            }
            "--autoplay" => args.autoplay = true,
            "--mode" => {
                let name = iter.next().ok_or("--mode needs a name")?;
                args.mode = Some(ModeKind::from_str(&name).ok_or(format!("unknown mode: {name}"))?);
            }
            _ if arg.starts_with("--") => return Err(format!("unknown option: {arg}")),
            _ => args.beatmap = Some(arg),
        }
    }
    Ok(args)
}

fn run(args: Args) -> Result<()> {
    let mut settings =
        Settings::load_or_default(args.settings.as_deref().unwrap_or(DEFAULT_SETTINGS_PATH));
    settings.autoplay |= args.autoplay;
    if let Some(mode) = args.mode {
        settings.mode = mode;
    }
    settings.validate()?;

    let beatmap = match &args.beatmap {
        Some(path) => Beatmap::load(path)?,
        None => {
            log::info!(
                "No beatmap given, generating {} objects with seed {}",
                settings.demo_length,
                settings.seed
            );
            beatmap::generate(settings.seed, settings.demo_length, Difficulty::default())?
        }
    };

    // Run a second past the last object so everything gets judged
    let audio = SimulatedAudio::new(settings.frame_ms, beatmap.length() + 1000.0);
    let input = if settings.autoplay {
        ScriptedInput::default()
    } else {
        ScriptedInput::perfect(&beatmap, settings.frame_ms)
    };

    let mut game = Game::new(beatmap, &settings, audio, input, NullRenderer::default())?;
    let tally = game.run()?;
    println!("{}", serde_json::to_string_pretty(&tally)?);
    println!("accuracy: {:.2}%", tally.accuracy() * 100.0);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Hitline (headless) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("usage: hitline [BEATMAP.json] [--settings FILE] [--autoplay] [--mode NAME]");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
