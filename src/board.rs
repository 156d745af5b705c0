// =====================
// Board State
// =====================

use std::fmt;

/// Square index, 0..64. Row-major from White's lower-left corner:
/// a1 = 0, h1 = 7, a2 = 8, h8 = 63. Moving up a rank is +8.
pub type Sq = usize;

pub const BOARD_SIZE: usize = 64;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "light"),
            Color::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum PieceKind {
    King,
    Pawn,
    Queen,
    Rook,
    Knight,
    Bishop,
}

/// One piece on the board. `has_moved` flips to true the first time a move
/// is applied from this piece's square and never flips back.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }
}

/// A candidate or confirmed move. Carries no capture or special-move
/// metadata; castling, en passant and promotion are not modeled.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Move {
    pub from: Sq,
    pub to: Sq,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", sq_to_alg(self.from), sq_to_alg(self.to))
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 64-square position. Plain value type: cloning yields a fully
/// independent copy, which is what the legality filter relies on.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    pub cells: [Option<Piece>; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Standard initial arrangement: back ranks R N B Q K B N R on files
    /// a..h for both sides, pawns on the second ranks. Light owns ranks
    /// 1-2, Dark ranks 7-8.
    pub fn new() -> Board {
        let mut b = Board::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            b.cells[sq_at(0, file)] = Some(Piece::new(kind, Color::Light));
            b.cells[sq_at(7, file)] = Some(Piece::new(kind, Color::Dark));
        }
        for file in 0..8 {
            b.cells[sq_at(1, file)] = Some(Piece::new(PieceKind::Pawn, Color::Light));
            b.cells[sq_at(6, file)] = Some(Piece::new(PieceKind::Pawn, Color::Dark));
        }
        b
    }

    #[inline]
    pub fn piece_at(&self, s: Sq) -> Option<Piece> {
        self.cells[s]
    }

    pub fn find_king(&self, color: Color) -> Option<Sq> {
        self.cells.iter().position(|cell| {
            matches!(cell, Some(p) if p.kind == PieceKind::King && p.color == color)
        })
    }

    /// Relocate the piece at `from` to `to`, clearing the origin and
    /// marking the piece as moved. No validation: legality is the caller's
    /// precondition, and this never fails.
    pub fn apply_move(&mut self, from: Sq, to: Sq) {
        if let Some(mut piece) = self.cells[from].take() {
            piece.has_moved = true;
            self.cells[to] = Some(piece);
        }
    }

    /// Clone-and-apply, used for the scratch positions of the legality
    /// filter. The live board is untouched.
    pub fn after_move(&self, from: Sq, to: Sq) -> Board {
        let mut b = self.clone();
        b.apply_move(from, to);
        b
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::new()
    }
}

#[inline]
pub fn sq_at(rank: usize, file: usize) -> Sq {
    rank * 8 + file
}

#[inline]
pub fn rank_of(s: Sq) -> usize {
    s / 8
}

#[inline]
pub fn file_of(s: Sq) -> usize {
    s % 8
}

/// Square to algebraic, e.g. 12 -> "e2".
pub fn sq_to_alg(s: Sq) -> String {
    let file = (b'a' + file_of(s) as u8) as char;
    let rank = (b'1' + rank_of(s) as u8) as char;
    format!("{}{}", file, rank)
}

/// Algebraic to square index, e.g. "e2" -> 12. Anything that is not
/// exactly a file letter a-h followed by a rank digit 1-8 is `None`.
pub fn sq_from_alg(text: &str) -> Option<Sq> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = (bytes[0] as char).to_ascii_lowercase();
    let rank = bytes[1] as char;
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    Some(sq_at(rank as usize - '1' as usize, file as usize - 'a' as usize))
}
