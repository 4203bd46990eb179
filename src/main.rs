//! Code Debugger - Entry Point
//!
//! Sets up logging, builds the game and runs the read-eval-print loop on
//! stdin/stdout.

use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};

use anyhow::{Context, Result};

use code_debugger::game::GameMessage;
use code_debugger::GameError;
use code_debugger::{DataManager, Game};

const PROMPT: &str = "\n> What do you do? ";

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Code Debugger v{}", env!("CARGO_PKG_VERSION"));

    let data = DataManager::load().context("failed to load world data")?;
    let mut game = Game::new(data, None);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    print_messages(&mut stdout, game.drain_messages())?;

    let result = run_loop(&mut stdin.lock(), &mut stdout, &mut game);

    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
    }
    log::info!("Code Debugger shut down ({:?})", game.state());
    result
}

/// Log to a file so log lines never mix with game text
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("code-debugger.log")
    {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder.init();
}

/// Read-eval-print loop. Runs until the game stops or input ends.
///
/// Only real I/O failures end the loop early; a bad line or a faulting
/// command is reported and the next prompt follows.
fn run_loop(input: &mut impl BufRead, output: &mut impl Write, game: &mut Game) -> Result<()> {
    let mut buf = Vec::new();

    while game.is_running() {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).context("failed to read input")? == 0 {
            log::info!("End of input, leaving the game");
            break;
        }

        match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => run_isolated(game, |game| game.handle_command(&line)),
            Err(e) => game.report_fault(&format!("input is not valid UTF-8 ({})", e.utf8_error())),
        }

        print_messages(output, game.drain_messages())?;
    }

    Ok(())
}

/// Run one command, turning an error or a panic into a reported fault
fn run_isolated(game: &mut Game, command: impl FnOnce(&mut Game) -> Result<(), GameError>) {
    match panic::catch_unwind(AssertUnwindSafe(|| command(game))) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => game.report_fault(&e.to_string()),
        Err(payload) => {
            let description = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            game.report_fault(&description);
        }
    }
}

fn print_messages(output: &mut impl Write, messages: Vec<GameMessage>) -> io::Result<()> {
    for message in messages {
        log::debug!("[{:?}] {}", message.category, message.text.trim());
        writeln!(output, "{}", message.text)?;
    }
    output.flush()
}
