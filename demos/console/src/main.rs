//! Terminal client for Pentagrid.
//!
//! Connects to an authority, renders the board as text after every
//! update, and drives placement and moves from stdin:
//!
//! ```text
//! console-client [ws://host:port] [player-name]
//!
//! commands:
//!   click <row> <col>   click a board cell
//!   place <kind>        answer a placement request (P1..P5, H1, H2)
//!   new                 request a fresh game
//!   quit                exit
//! ```

use std::env;

use pentagrid::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader};

// ---------------------------------------------------------------------------
// Terminal renderer
// ---------------------------------------------------------------------------

#[derive(Default)]
struct ConsoleView;

impl ConsoleView {
    fn render_board(snapshot: &GameStateSnapshot) {
        println!("     0     1     2     3     4");
        for row in 0..BOARD_SIZE {
            print!("{row} ");
            for col in 0..BOARD_SIZE {
                match snapshot.board.at(Cell::new(row, col)) {
                    Some(content) => print!(" {content} "),
                    None => print!("  .   "),
                }
            }
            println!();
        }
    }
}

impl BoardView for ConsoleView {
    fn seat_assigned(&mut self, seat: Seat) {
        println!("you are {seat}; place 5 pieces on row {}", seat.home_row());
    }

    fn board_updated(&mut self, snapshot: &GameStateSnapshot) {
        Self::render_board(snapshot);
        println!("current turn: {}", snapshot.turn_seat());
        if !snapshot.move_history.is_empty() {
            println!("moves:");
            for entry in &snapshot.move_history {
                println!("  {entry}");
            }
        }
    }

    fn highlights_changed(&mut self, highlights: &[Cell]) {
        if !highlights.is_empty() {
            let cells: Vec<String> =
                highlights.iter().map(ToString::to_string).collect();
            println!("possible destinations: {}", cells.join(" "));
        }
    }

    fn character_requested(&mut self, cell: Cell) {
        println!("choose a piece for {cell}: place <P1..P5|H1|H2>");
    }

    fn placement_recorded(&mut self, cell: Cell, seat: Seat, kind: CharacterType) {
        println!("placed {}-{kind} at {cell}", seat.marker());
    }

    fn notice(&mut self, message: &str) {
        println!("! {message}");
    }

    fn game_over(&mut self, message: &str) {
        println!("=== {message} ===");
        println!("type `new` to play again");
    }
}

// ---------------------------------------------------------------------------
// Command parsing
// ---------------------------------------------------------------------------

fn handle_command(line: &str, input: &PlayerInputSender) -> bool {
    let mut words = line.split_whitespace();
    match words.next() {
        Some("click") => {
            let cell = words
                .next()
                .and_then(|w| w.parse().ok())
                .zip(words.next().and_then(|w| w.parse().ok()))
                .map(|(row, col)| Cell::new(row, col));
            match cell {
                Some(cell) => input.click(cell),
                None => println!("usage: click <row> <col>"),
            }
        }
        Some("place") => match words.next().map(str::parse::<CharacterType>) {
            Some(Ok(kind)) => input.character(kind),
            _ => println!("usage: place <P1..P5|H1|H2>"),
        },
        Some("new") => input.new_game(),
        Some("quit") | Some("exit") => return false,
        Some(other) => println!("unknown command: {other}"),
        None => {}
    }
    true
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "console_client=info,pentagrid=info".into()),
        )
        .init();

    let mut args = env::args().skip(1);
    let url = args
        .next()
        .unwrap_or_else(|| "ws://127.0.0.1:8080".to_string());
    let name = args.next().unwrap_or_else(|| "anonymous".to_string());

    println!("connecting to {url} as {name}");
    let (client, input) =
        GameClient::connect(&url, &name, ConsoleView::default()).await?;
    let mut run = tokio::spawn(client.run());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            result = &mut run => {
                match result? {
                    Ok(()) => println!("connection closed"),
                    Err(e) => eprintln!("connection failed: {e}"),
                }
                return Ok(());
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_command(line.trim(), &input) {
                    break;
                }
            }
        }
    }

    run.abort();
    Ok(())
}
