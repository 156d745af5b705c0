// Terminal UI: colored board rendering with move highlighting.

pub mod integration;

pub use integration::GameController;

use crate::board::{Board, Color, Move, Piece, Sq, sq_at};

// ============================================================================
// COLOR CODES & STYLING
// ============================================================================

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";

    pub const BRIGHT_BLUE: &str = "\x1b[94m";
    pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
    pub const BRIGHT_WHITE: &str = "\x1b[97m";

    pub const BG_LIGHT: &str = "\x1b[48;5;252m"; // light square
    pub const BG_DARK: &str = "\x1b[48;5;240m"; // dark square
    pub const BG_ORIGIN: &str = "\x1b[48;5;226m"; // selected piece
    pub const BG_QUIET: &str = "\x1b[48;5;117m"; // reachable empty square
    pub const BG_CAPTURE: &str = "\x1b[48;5;196m"; // capturable enemy piece
}

// ============================================================================
// UNICODE CHESS PIECES
// ============================================================================

pub mod symbols {
    use crate::board::{Color, Piece, PieceKind};

    pub fn piece_symbol(piece: Piece) -> &'static str {
        match (piece.color, piece.kind) {
            (Color::Light, PieceKind::King) => "♔",
            (Color::Light, PieceKind::Queen) => "♕",
            (Color::Light, PieceKind::Rook) => "♖",
            (Color::Light, PieceKind::Bishop) => "♗",
            (Color::Light, PieceKind::Knight) => "♘",
            (Color::Light, PieceKind::Pawn) => "♙",
            (Color::Dark, PieceKind::King) => "♚",
            (Color::Dark, PieceKind::Queen) => "♛",
            (Color::Dark, PieceKind::Rook) => "♜",
            (Color::Dark, PieceKind::Bishop) => "♝",
            (Color::Dark, PieceKind::Knight) => "♞",
            (Color::Dark, PieceKind::Pawn) => "♟",
        }
    }
}

// ============================================================================
// BOARD DISPLAY
// ============================================================================

/// Renders the board with rank/file labels and a checkerboard background.
/// Optional highlights mark a selected origin square, the empty squares it
/// can move to, and the enemy pieces it can capture.
#[derive(Default)]
pub struct BoardDisplay {
    pub origin: Option<Sq>,
    pub quiet_targets: Vec<Sq>,
    pub capture_targets: Vec<Sq>,
}

impl BoardDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight everything the piece on `origin` can do, splitting its
    /// moves into quiet targets and captures by destination occupancy.
    pub fn with_moves(board: &Board, origin: Sq, moves: &[Move]) -> Self {
        let mut quiet_targets = Vec::new();
        let mut capture_targets = Vec::new();
        for mv in moves.iter().filter(|m| m.from == origin) {
            if board.piece_at(mv.to).is_some() {
                capture_targets.push(mv.to);
            } else {
                quiet_targets.push(mv.to);
            }
        }
        Self {
            origin: Some(origin),
            quiet_targets,
            capture_targets,
        }
    }

    pub fn render(&self, board: &Board) {
        use colors::*;

        println!();
        for rank in (0..8).rev() {
            print!("  {} ", rank + 1);
            for file in 0..8 {
                let square = sq_at(rank, file);
                let bg = self.square_background(square, rank, file);
                match board.piece_at(square) {
                    Some(piece) => print!(
                        "{}{}{} {} {}",
                        bg,
                        BOLD,
                        piece_foreground(piece),
                        symbols::piece_symbol(piece),
                        RESET
                    ),
                    None => print!("{}   {}", bg, RESET),
                }
            }
            println!();
        }
        println!("      a  b  c  d  e  f  g  h");
        println!();
    }

    fn square_background(&self, square: Sq, rank: usize, file: usize) -> &'static str {
        use colors::*;

        if self.origin == Some(square) {
            return BG_ORIGIN;
        }
        if self.capture_targets.contains(&square) {
            return BG_CAPTURE;
        }
        if self.quiet_targets.contains(&square) {
            return BG_QUIET;
        }
        if (rank + file) % 2 == 0 {
            BG_DARK
        } else {
            BG_LIGHT
        }
    }
}

fn piece_foreground(piece: Piece) -> &'static str {
    match piece.color {
        Color::Light => colors::BRIGHT_MAGENTA,
        Color::Dark => colors::BRIGHT_BLUE,
    }
}
