//! Line-oriented adapter: one command per input line, board printed as text.

use std::io::{self, BufRead, Write};

use crate::game::{GameEngine, Player, COLS};

use super::game_view::{outcome_text, rejection_text, status_text};

const BELL: &str = "\x07";

enum Command {
    Drop(isize),
    NewGame,
    Quit,
    Blank,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => Command::Blank,
        "q" | "quit" | "exit" => Command::Quit,
        "n" | "new" | "r" | "reset" => Command::NewGame,
        other => match other.parse::<isize>() {
            // Columns are typed 1-based
            Ok(column) => Command::Drop(column.saturating_sub(1)),
            Err(_) => Command::Unknown,
        },
    }
}

/// Board as text, top row first. Player 1 is `X`, Player 2 is `O`.
pub fn render_text(engine: &GameEngine) -> String {
    let mut out = String::new();
    let header: Vec<String> = (1..=COLS).map(|col| col.to_string()).collect();
    out.push(' ');
    out.push_str(&header.join(" "));
    out.push('\n');

    for cells in engine.snapshot() {
        let row: Vec<&str> = cells
            .iter()
            .map(|&cell| match Player::from_cell(cell) {
                Some(Player::One) => "X",
                Some(Player::Two) => "O",
                None => ".",
            })
            .collect();
        out.push('|');
        out.push_str(&row.join(" "));
        out.push_str("|\n");
    }
    out
}

/// Play games on `input`/`output` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    mut input: R,
    mut output: W,
    bell: bool,
) -> io::Result<()> {
    write_board(engine, &mut output)?;
    write_prompt(engine, &mut output)?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Undecodable bytes become U+FFFD and fall through to Unknown
        let line = String::from_utf8_lossy(&buf);
        match parse_command(&line) {
            Command::Quit => break,
            Command::Blank => {}
            Command::NewGame => {
                engine.reset();
                writeln!(output, "New game started!")?;
                write_board(engine, &mut output)?;
            }
            Command::Drop(column) => match engine.try_drop_token(column) {
                Ok(_) => write_board(engine, &mut output)?,
                Err(err) => reject(&mut output, &rejection_text(&err), bell)?,
            },
            Command::Unknown => {
                let hint = format!("Enter a column 1-{COLS}, 'n' for a new game or 'q' to quit.");
                reject(&mut output, &hint, bell)?;
            }
        }
        write_prompt(engine, &mut output)?;
    }

    output.flush()
}

fn write_board<W: Write>(engine: &GameEngine, output: &mut W) -> io::Result<()> {
    write!(output, "{}", render_text(engine))?;
    if let Some(outcome) = engine.winner() {
        writeln!(output, "{}", outcome_text(outcome))?;
    }
    Ok(())
}

fn write_prompt<W: Write>(engine: &GameEngine, output: &mut W) -> io::Result<()> {
    if engine.is_game_over() {
        write!(output, "[n]ew game or [q]uit> ")?;
    } else {
        let (status, _) = status_text(engine);
        write!(output, "{status} (column 1-{COLS})> ")?;
    }
    output.flush()
}

fn reject<W: Write>(output: &mut W, message: &str, bell: bool) -> io::Result<()> {
    if bell {
        write!(output, "{BELL}")?;
    }
    writeln!(output, "{message}")
}
