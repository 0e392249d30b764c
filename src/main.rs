use clap::Parser;
use dino_runner::build_info::BUILD_VERSION;
use dino_runner::core::{ConfigError, RunnerConfig, SystemClock};
use dino_runner::frame_loop::FrameLoop;
use dino_runner::game::GameState;
use dino_runner::input::CrosstermInput;
use dino_runner::logging;
use dino_runner::ui::terminal::TerminalRenderer;
use log::{debug, error, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Jump the cacti. Up/Space to jump, R/Space to restart, Esc to quit.
#[derive(Debug, Parser)]
#[command(name = "dino-runner", version = BUILD_VERSION)]
struct Cli {
    /// JSON file overriding any tuning values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Points per day/night block
    #[arg(long, value_name = "N")]
    night_threshold: Option<u32>,

    /// Where to write the log (default: user data directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match logging::init(cli.log_file.as_deref()) {
        Ok(path) => info!("dino-runner {} logging to {}", BUILD_VERSION, path.display()),
        Err(e) => eprintln!("dino-runner: logging disabled: {}", e),
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("config error: {}", e);
            eprintln!("dino-runner: {}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!("config: {:?}", config);

    match run(config) {
        Ok(()) => {
            info!("exited normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("terminal failure: {}", e);
            eprintln!("dino-runner: terminal failure: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<RunnerConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => RunnerConfig::from_file(path)?,
        None => RunnerConfig::default(),
    };
    if let Some(threshold) = cli.night_threshold {
        config.night_mode_threshold = threshold;
    }
    config.validate()?;
    Ok(config)
}

/// Own the terminal for the lifetime of the game and always hand it back.
fn run(config: RunnerConfig) -> io::Result<()> {
    let mut frame_loop = FrameLoop::new(&config);
    let mut game = GameState::new(config);
    let clock = SystemClock::new();
    let mut input = CrosstermInput::new();

    let mut renderer = TerminalRenderer::new()?;
    let result = frame_loop.run(&mut game, &clock, &mut input, &mut renderer);
    let restored = renderer.restore();

    info!(
        "final score {} after {} frames",
        game.score,
        frame_loop.frame_count()
    );
    result.and(restored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dino-runner").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = load_config(&parse(&[])).unwrap();
        assert_eq!(config, RunnerConfig::default());
    }

    #[test]
    fn test_night_threshold_flag_overrides() {
        let config = load_config(&parse(&["--night-threshold", "3"])).unwrap();
        assert_eq!(config.night_mode_threshold, 3);
    }

    #[test]
    fn test_zero_night_threshold_is_rejected() {
        let err = load_config(&parse(&["--night-threshold", "0"])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_config_file_is_read_error() {
        let err = load_config(&parse(&["--config", "/nonexistent/dino-runner.json"])).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
