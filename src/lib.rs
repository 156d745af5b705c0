// Terminal chess:
// - flat 64-square board, pieces tracked with a first-move flag
// - precomputed squares-to-edge geometry shared by every generator
// - pseudo-legal move generation per piece kind
// - legality filter that simulates each move on a scratch board
// - colored terminal UI with move highlighting, random computer opponent

pub mod board;
pub mod error;
pub mod geometry;
pub mod movegen;
pub mod policy;
pub mod ui;

pub use board::{Board, Color, Move, Piece, PieceKind, Sq, sq_from_alg, sq_to_alg};
pub use error::EngineError;
pub use movegen::{generate_legal_moves, generate_moves};
