//! Endless Stairs (default binary).
//!
//! Menu and name prompt run in the normal (cooked) terminal; a game session
//! switches to the alternate screen and raw keyboard input until it ends.

use std::fs::File;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use crossterm::{cursor, execute, terminal};

use endless_stairs::config::AppConfig;
use endless_stairs::core::ObstacleGenerator;
use endless_stairs::display::TerminalDisplay;
use endless_stairs::engine::{GameSummary, RoundEngine, SessionError, SessionState};
use endless_stairs::input::{ChoiceListener, CrosstermKeySource};
use endless_stairs::leaderboard::{submit, LeaderboardEntry, LeaderboardStore};
use endless_stairs::menu::{
    leaderboard_lines, session_end_lines, MenuChoice, MENU_LINES, MENU_PROMPT,
};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;
    log::info!("starting with {config:?}");

    let result = run(&config);
    if let Err(err) = &result {
        log::error!("exiting on error: {err:#}");
    }
    result
}

/// Logs go to a file when one is configured; the terminal belongs to the game.
fn init_logging(config: &AppConfig) -> Result<()> {
    match &config.log_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
                .init();
        }
    }
    Ok(())
}

fn run(config: &AppConfig) -> Result<()> {
    let store = config.leaderboard_store();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut notice: Option<&str> = None;

    loop {
        clear_screen()?;
        for line in MENU_LINES {
            println!("{line}");
        }
        if let Some(text) = notice.take() {
            println!("{text}");
        }
        print!("{MENU_PROMPT}");
        io::stdout().flush()?;

        let Some(input) = lines.next().transpose()? else {
            return Ok(());
        };

        match MenuChoice::parse(&input) {
            Some(MenuChoice::StartGame) => {
                let Some(state) = prompt_name(&mut lines)? else {
                    return Ok(());
                };
                let outcome = play(state)?;
                for line in session_end_lines(&outcome) {
                    println!("{line}");
                }
                if let Ok(summary) = &outcome {
                    record(config, &store, summary);
                }
                wait_for_enter(&mut lines)?;
            }
            Some(MenuChoice::ViewLeaderboard) => {
                clear_screen()?;
                let entries = store.top_n(config.leaderboard_size).unwrap_or_else(|err| {
                    log::warn!("could not read leaderboard: {err}");
                    Vec::new()
                });
                for line in leaderboard_lines(&entries) {
                    println!("{line}");
                }
                wait_for_enter(&mut lines)?;
            }
            Some(MenuChoice::Quit) => {
                println!("Goodbye!");
                return Ok(());
            }
            None => notice = Some("Invalid option. Please try again."),
        }
    }
}

/// Ask until a non-empty name is given. `None` on end of input.
fn prompt_name(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Option<SessionState>> {
    let mut state = SessionState::new();
    loop {
        print!("Enter your name: ");
        io::stdout().flush()?;
        let Some(input) = lines.next().transpose()? else {
            return Ok(None);
        };
        state = match state.accept_name(&input) {
            Ok(playing) => return Ok(Some(playing)),
            Err((state, err)) => {
                println!("{err}");
                state
            }
        };
    }
}

/// Run one game session. The inner error is a session that could not be played.
fn play(state: SessionState) -> Result<Result<GameSummary, SessionError>> {
    let listener = ChoiceListener::new(CrosstermKeySource::new())?;
    let mut display = TerminalDisplay::new();
    display.enter()?;

    let mut engine = RoundEngine::new(ObstacleGenerator::new(), listener, display);
    let result = engine.run(state);

    // Release raw mode before leaving the alternate screen.
    let (_, listener, mut display) = engine.into_parts();
    drop(listener);
    let _ = display.exit();

    Ok(result)
}

fn record(config: &AppConfig, store: &impl LeaderboardStore, summary: &GameSummary) {
    if config.leaderboard_disabled {
        return;
    }
    let entry = LeaderboardEntry::new(summary.name.clone(), summary.score);
    if let Some(rank) = submit(store, entry, config.leaderboard_size) {
        println!("New leaderboard entry at #{rank}!");
    }
}

fn wait_for_enter(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<()> {
    print!("Press Enter to return to menu...");
    io::stdout().flush()?;
    lines.next().transpose()?;
    Ok(())
}

fn clear_screen() -> Result<()> {
    execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    Ok(())
}
