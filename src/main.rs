//! Main entry point for the terminal game.
//!
//! Initializes logging and the actor system, then runs the menu loop: every start
//! creates a brand-new session, terminal lines are forwarded to it as commands, and
//! the session's end summary brings the menu back.

use std::io;

use actix::Actor;
use env_logger::Env;
use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use rush_home::GameError;
use rush_home::session::{
    parse_input, parse_menu_choice, Command, CreateGame, GameSessionManager, MenuChoice,
    SessionSummary, TerminalFrontend,
};

fn menu_text(last: Option<SessionSummary>) -> String {
    let headline = last.map(|s| s.headline()).unwrap_or("Try not to be late!");
    format!("\n== {} ==\nPress Enter to start, or type q to exit.", headline)
}

#[actix::main]
async fn main() -> io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let manager = GameSessionManager::new().start();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut last: Option<SessionSummary> = None;

    loop {
        println!("{}", menu_text(last));
        let Some(line) = lines.next_line().await? else { break };
        match parse_menu_choice(&line) {
            Ok(MenuChoice::Start) => {}
            Ok(MenuChoice::Exit) => break,
            Err(e) => {
                warn!("[Menu] {}", e);
                continue;
            }
        }

        let (tx, mut rx) = mpsc::unbounded_channel();
        let (game_id, session) = manager
            .send(CreateGame::new(Box::new(TerminalFrontend::new(tx))))
            .await
            .map_err(io::Error::other)?;
        info!("[Menu] playing game_id={}", game_id);

        last = loop {
            tokio::select! {
                summary = rx.recv() => break summary,
                line = lines.next_line() => {
                    let Some(line) = line? else { return Ok(()) };
                    let input = match parse_input(&line) {
                        Ok(input) => input,
                        Err(e) => {
                            warn!("[Input] {}", e);
                            continue;
                        }
                    };
                    let sent = session
                        .send(Command(input))
                        .await
                        .unwrap_or(Err(GameError::SessionClosed));
                    if let Err(e) = sent {
                        warn!("[Input] game_id={} {}", game_id, e);
                    }
                }
            }
        };
    }

    info!("[Menu] bye");
    Ok(())
}
