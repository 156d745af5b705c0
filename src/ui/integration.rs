// Integration layer between the terminal UI and the rules engine.

use std::io::{self, Write};

use tracing::{error, warn};

use crate::board::{Board, Color, Move, Sq, sq_from_alg};
use crate::movegen::generate_legal_moves;
use crate::policy;
use crate::ui::{BoardDisplay, colors};

// ============================================================================
// GAME CONTROLLER
// ============================================================================

/// Drives the interactive game: renders the board, keeps the legal-move
/// list for the active side, applies confirmed moves, and lets the random
/// policy play the dark side.
pub struct GameController {
    board: Board,
    active: Color,
    computer_plays_dark: bool,
    pending_show: Option<Sq>,
}

enum Command {
    Pass,
    Quit,
    Help,
    Move(Sq, Sq),
    Show(Sq),
    Invalid(String),
}

impl GameController {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            active: Color::Light,
            computer_plays_dark: true,
            pending_show: None,
        }
    }

    /// Both sides on the keyboard; no computer opponent.
    pub fn two_player() -> Self {
        Self {
            computer_plays_dark: false,
            ..Self::new()
        }
    }

    pub fn run(&mut self) {
        print_banner();

        loop {
            let legal = match generate_legal_moves(&self.board, self.active) {
                Ok(moves) => moves,
                Err(e) => {
                    error!("cannot continue: {}", e);
                    eprintln!("fatal: {}", e);
                    return;
                }
            };

            let display = match self.pending_show.take() {
                Some(origin) => BoardDisplay::with_moves(&self.board, origin, &legal),
                None => BoardDisplay::new(),
            };
            display.render(&self.board);

            if self.active == Color::Dark && self.computer_plays_dark {
                match policy::choose_move(&legal) {
                    Some(mv) => {
                        println!("  computer plays {}", mv);
                        self.board.apply_move(mv.from, mv.to);
                    }
                    None => println!("  computer has no move, passing"),
                }
                self.active = self.active.opponent();
                continue;
            }

            match self.read_command() {
                Command::Quit => break,
                Command::Pass => self.active = self.active.opponent(),
                Command::Help => print_help(),
                Command::Show(origin) => self.pending_show = Some(origin),
                Command::Move(from, to) => {
                    let requested = Move { from, to };
                    if legal.contains(&requested) {
                        self.board.apply_move(from, to);
                        self.active = self.active.opponent();
                    } else {
                        warn!(%requested, "not in the legal-move list");
                        println!("  {} is not a legal move here", requested);
                    }
                }
                Command::Invalid(line) => {
                    warn!(input = %line, "could not parse command");
                    println!("  could not make sense of {:?}, try 'help'", line);
                }
            }
        }
        println!("bye");
    }

    fn read_command(&self) -> Command {
        use colors::*;

        let side = match self.active {
            Color::Light => format!("{}light{}", BRIGHT_MAGENTA, RESET),
            Color::Dark => format!("{}dark{}", BRIGHT_BLUE, RESET),
        };
        print!("{}> ", side);
        io::stdout().flush().ok();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return Command::Quit;
        }
        parse_command(&line)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_command(line: &str) -> Command {
    let parts: Vec<&str> = line.trim().split_whitespace().collect();
    match parts.as_slice() {
        [] => Command::Pass,
        ["exit"] | ["quit"] => Command::Quit,
        ["help"] => Command::Help,
        ["move", from, to] => match (sq_from_alg(from), sq_from_alg(to)) {
            (Some(from), Some(to)) => Command::Move(from, to),
            _ => Command::Invalid(line.trim().to_string()),
        },
        ["show", origin] => match sq_from_alg(origin) {
            Some(origin) => Command::Show(origin),
            None => Command::Invalid(line.trim().to_string()),
        },
        _ => Command::Invalid(line.trim().to_string()),
    }
}

fn print_banner() {
    use colors::*;
    println!();
    println!("  {}{}WELCOME TO CHESS{}", BOLD, BRIGHT_CYAN, RESET);
    println!("  type 'help' for commands");
}

fn print_help() {
    println!("Commands:");
    println!("  move <from> <to>  - make a move, e.g. move e2 e4");
    println!("  show <square>     - highlight what the piece there can do");
    println!("  help              - this");
    println!("  (empty line)      - pass the turn to the other side");
    println!("  exit | quit       - leave the game");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_move(cmd: Command) -> Option<(Sq, Sq)> {
        match cmd {
            Command::Move(from, to) => Some((from, to)),
            _ => None,
        }
    }

    #[test]
    fn parses_move_commands() {
        let (from, to) = as_move(parse_command("move e2 e4")).unwrap();
        assert_eq!(from, sq_from_alg("e2").unwrap());
        assert_eq!(to, sq_from_alg("e4").unwrap());
    }

    #[test]
    fn malformed_squares_are_invalid_not_fatal() {
        assert!(matches!(parse_command("move e9 e4"), Command::Invalid(_)));
        assert!(matches!(parse_command("move e2"), Command::Invalid(_)));
        assert!(matches!(parse_command("show z1"), Command::Invalid(_)));
        assert!(matches!(parse_command("castle"), Command::Invalid(_)));
    }

    #[test]
    fn blank_line_passes_the_turn() {
        assert!(matches!(parse_command("\n"), Command::Pass));
        assert!(matches!(parse_command("   "), Command::Pass));
    }

    #[test]
    fn quit_synonyms() {
        assert!(matches!(parse_command("exit"), Command::Quit));
        assert!(matches!(parse_command("quit"), Command::Quit));
    }
}
