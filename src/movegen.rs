// =====================
// Move Generation
// =====================

use std::ops::Range;

use tracing::debug;

use crate::board::{BOARD_SIZE, Board, Color, Move, Piece, PieceKind, Sq};
use crate::error::EngineError;
use crate::geometry::{
    DIR_DOWN, DIR_DOWN_LEFT, DIR_DOWN_RIGHT, DIR_LEFT, DIR_RIGHT, DIR_UP, DIR_UP_LEFT,
    DIR_UP_RIGHT, OFFSETS, distance_to_edge,
};

const ORTHOGONAL_DIRS: Range<usize> = 0..4;
const DIAGONAL_DIRS: Range<usize> = 4..8;
const ALL_DIRS: Range<usize> = 0..8;

/// All pseudo-legal moves for `side`: per-piece movement and occupancy
/// rules, ignoring whether the mover's own king ends up attacked. Order is
/// deterministic: ascending square, then per-piece direction order.
pub fn generate_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for square in 0..BOARD_SIZE {
        let Some(piece) = board.piece_at(square) else {
            continue;
        };
        if piece.color != side {
            continue;
        }
        match piece.kind {
            PieceKind::Rook => slider_moves(board, square, piece, ORTHOGONAL_DIRS, &mut moves),
            PieceKind::Bishop => slider_moves(board, square, piece, DIAGONAL_DIRS, &mut moves),
            PieceKind::Queen => slider_moves(board, square, piece, ALL_DIRS, &mut moves),
            PieceKind::King => king_moves(board, square, piece, &mut moves),
            PieceKind::Pawn => pawn_moves(board, square, piece, &mut moves),
            PieceKind::Knight => knight_moves(board, square, piece, &mut moves),
        }
    }
    moves
}

/// Pseudo-legal moves for `side` minus every move that would leave the
/// side's king attacked. Each candidate is simulated on a scratch copy and
/// the opponent's pseudo-legal replies are scanned against the king square:
/// the candidate's target square when the king itself moved, the original
/// king square otherwise. Output keeps the candidate order.
pub fn generate_legal_moves(board: &Board, side: Color) -> Result<Vec<Move>, EngineError> {
    let pseudo = generate_moves(board, side);
    let king_square = board
        .find_king(side)
        .ok_or(EngineError::MissingKing { color: side })?;
    let opponent = side.opponent();

    let mut legal = Vec::with_capacity(pseudo.len());
    for candidate in pseudo {
        let scratch = board.after_move(candidate.from, candidate.to);
        let replies = generate_moves(&scratch, opponent);

        let exposed = if candidate.from == king_square {
            candidate.to
        } else {
            king_square
        };
        if replies.iter().any(|reply| reply.to == exposed) {
            debug!(candidate = %candidate, "dropped, king attacked on {}", crate::board::sq_to_alg(exposed));
            continue;
        }
        legal.push(candidate);
    }
    Ok(legal)
}

// Rook, bishop and queen differ only in which direction range they walk.
// Each ray stops before a friendly piece, and on an enemy piece after
// emitting the capture.
fn slider_moves(board: &Board, start: Sq, piece: Piece, dirs: Range<usize>, moves: &mut Vec<Move>) {
    for dir in dirs {
        for step in 1..=distance_to_edge(start, dir) as i32 {
            let target = (start as i32 + OFFSETS[dir] * step) as Sq;
            match board.piece_at(target) {
                Some(other) if other.color == piece.color => break,
                Some(_) => {
                    moves.push(Move {
                        from: start,
                        to: target,
                    });
                    break;
                }
                None => moves.push(Move {
                    from: start,
                    to: target,
                }),
            }
        }
    }
}

fn king_moves(board: &Board, start: Sq, piece: Piece, moves: &mut Vec<Move>) {
    for dir in ALL_DIRS {
        if distance_to_edge(start, dir) == 0 {
            continue;
        }
        let target = (start as i32 + OFFSETS[dir]) as Sq;
        if let Some(other) = board.piece_at(target) {
            if other.color == piece.color {
                continue;
            }
        }
        moves.push(Move {
            from: start,
            to: target,
        });
    }
}

fn pawn_moves(board: &Board, start: Sq, piece: Piece, moves: &mut Vec<Move>) {
    let forward = match piece.color {
        Color::Light => DIR_UP,
        Color::Dark => DIR_DOWN,
    };
    let reach = if piece.has_moved { 1 } else { 2 };

    for step in 1..=reach {
        if (distance_to_edge(start, forward) as i32) < step {
            break;
        }
        let target = (start as i32 + OFFSETS[forward] * step) as Sq;
        if board.piece_at(target).is_some() {
            // a blocked pawn cannot leap over, whatever is in the way
            break;
        }
        moves.push(Move {
            from: start,
            to: target,
        });
    }

    // the forward diagonals, captures only
    let capture_dirs = match piece.color {
        Color::Light => [DIR_UP_LEFT, DIR_UP_RIGHT],
        Color::Dark => [DIR_DOWN_RIGHT, DIR_DOWN_LEFT],
    };
    for dir in capture_dirs {
        if distance_to_edge(start, dir) == 0 {
            continue;
        }
        let target = (start as i32 + OFFSETS[dir]) as Sq;
        if let Some(other) = board.piece_at(target) {
            if other.color != piece.color {
                moves.push(Move {
                    from: start,
                    to: target,
                });
            }
        }
    }
}

fn knight_moves(board: &Board, start: Sq, piece: Piece, moves: &mut Vec<Move>) {
    let up = distance_to_edge(start, DIR_UP);
    let down = distance_to_edge(start, DIR_DOWN);
    let left = distance_to_edge(start, DIR_LEFT);
    let right = distance_to_edge(start, DIR_RIGHT);

    // (clearance along the 2-step axis, clearance along the 1-step axis,
    // index delta); both clearances must allow the jump or it would wrap
    // around a board edge.
    let jumps: [(u8, u8, i32); 8] = [
        (up, right, 17),
        (up, left, 15),
        (down, right, -15),
        (down, left, -17),
        (right, up, 10),
        (right, down, -6),
        (left, up, 6),
        (left, down, -10),
    ];

    for (two_step, one_step, delta) in jumps {
        if two_step < 2 || one_step < 1 {
            continue;
        }
        let target = (start as i32 + delta) as Sq;
        if let Some(other) = board.piece_at(target) {
            if other.color == piece.color {
                continue;
            }
        }
        moves.push(Move {
            from: start,
            to: target,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, PieceKind, sq_from_alg};

    fn place(board: &mut Board, square: &str, kind: PieceKind, color: Color) {
        board.cells[sq_from_alg(square).unwrap()] = Some(Piece::new(kind, color));
    }

    #[test]
    fn lone_queen_covers_both_direction_sets() {
        let mut b = Board::empty();
        place(&mut b, "d4", PieceKind::Queen, Color::Light);
        let queen_moves = generate_moves(&b, Color::Light);
        // 14 orthogonal + 13 diagonal from d4 on an empty board
        assert_eq!(queen_moves.len(), 27);
    }

    #[test]
    fn pawn_first_move_reach_shrinks_after_moving() {
        let mut b = Board::empty();
        place(&mut b, "e2", PieceKind::Pawn, Color::Light);
        assert_eq!(generate_moves(&b, Color::Light).len(), 2);

        b.apply_move(sq_from_alg("e2").unwrap(), sq_from_alg("e4").unwrap());
        let after = generate_moves(&b, Color::Light);
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].to, sq_from_alg("e5").unwrap());
    }

    #[test]
    fn dark_pawn_moves_toward_rank_one() {
        let mut b = Board::empty();
        place(&mut b, "e7", PieceKind::Pawn, Color::Dark);
        let targets: Vec<Sq> = generate_moves(&b, Color::Dark).iter().map(|m| m.to).collect();
        assert_eq!(
            targets,
            vec![sq_from_alg("e6").unwrap(), sq_from_alg("e5").unwrap()]
        );
    }

    #[test]
    fn pawn_diagonal_needs_an_enemy() {
        let mut b = Board::empty();
        place(&mut b, "e4", PieceKind::Pawn, Color::Light);
        place(&mut b, "d5", PieceKind::Rook, Color::Dark);
        place(&mut b, "f5", PieceKind::Rook, Color::Light);
        b.cells[sq_from_alg("e4").unwrap()].as_mut().unwrap().has_moved = true;

        let pawn_targets: Vec<Sq> = generate_moves(&b, Color::Light)
            .iter()
            .filter(|m| m.from == sq_from_alg("e4").unwrap())
            .map(|m| m.to)
            .collect();
        // forward push plus the d5 capture; f5 is friendly, so no move there
        assert!(pawn_targets.contains(&sq_from_alg("e5").unwrap()));
        assert!(pawn_targets.contains(&sq_from_alg("d5").unwrap()));
        assert!(!pawn_targets.contains(&sq_from_alg("f5").unwrap()));
        assert_eq!(pawn_targets.len(), 2);
    }

    #[test]
    fn king_stays_on_the_board() {
        let mut b = Board::empty();
        place(&mut b, "a1", PieceKind::King, Color::Light);
        let targets: Vec<String> = generate_moves(&b, Color::Light)
            .iter()
            .map(|m| crate::board::sq_to_alg(m.to))
            .collect();
        assert_eq!(targets.len(), 3);
        for t in ["a2", "b1", "b2"] {
            assert!(targets.iter().any(|s| s == t), "missing {}", t);
        }
    }

    #[test]
    fn missing_king_is_an_error() {
        let mut b = Board::empty();
        place(&mut b, "a1", PieceKind::Rook, Color::Light);
        assert_eq!(
            generate_legal_moves(&b, Color::Light),
            Err(EngineError::MissingKing {
                color: Color::Light
            })
        );
    }

    #[test]
    fn legal_moves_keep_pseudo_order() {
        let b = Board::new();
        let pseudo = generate_moves(&b, Color::Light);
        let legal = generate_legal_moves(&b, Color::Light).unwrap();
        // from the initial position nothing is filtered, so the sequences
        // must be identical, not merely equal as sets
        assert_eq!(pseudo, legal);
    }
}
