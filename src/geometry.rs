// =====================
// Movement Geometry
// =====================
//
// Square index deltas per direction, plus a precomputed squares-to-edge
// table. Every generator walks the board with these instead of raw index
// arithmetic, which is what prevents moves from wrapping across the a/h
// files.
//
//    +7  +8  +9
//    -1   .  +1
//    -9  -8  -7

use crate::board::Sq;

/// Signed square-index deltas: up, down, left, right, up-left, down-right,
/// up-right, down-left. Orthogonals come first so sliders can take a
/// contiguous direction range (rook 0..4, bishop 4..8, queen 0..8).
pub const OFFSETS: [i32; 8] = [8, -8, -1, 1, 7, -7, 9, -9];

pub const DIR_UP: usize = 0;
pub const DIR_DOWN: usize = 1;
pub const DIR_LEFT: usize = 2;
pub const DIR_RIGHT: usize = 3;
pub const DIR_UP_LEFT: usize = 4;
pub const DIR_DOWN_RIGHT: usize = 5;
pub const DIR_UP_RIGHT: usize = 6;
pub const DIR_DOWN_LEFT: usize = 7;

static SQUARES_TO_EDGE: [[u8; 8]; 64] = build_squares_to_edge();

/// Steps that can be taken from `square` in `dir` before leaving the board.
/// Zero means the square already sits on that edge.
#[inline]
pub fn distance_to_edge(square: Sq, dir: usize) -> u8 {
    SQUARES_TO_EDGE[square][dir]
}

const fn min(a: u8, b: u8) -> u8 {
    if a < b { a } else { b }
}

const fn build_squares_to_edge() -> [[u8; 8]; 64] {
    let mut table = [[0u8; 8]; 64];
    let mut r = 0u8;
    while r < 8 {
        let mut c = 0u8;
        while c < 8 {
            let up = 7 - r;
            let down = r;
            let left = c;
            let right = 7 - c;
            table[(r * 8 + c) as usize] = [
                up,
                down,
                left,
                right,
                min(up, left),
                min(down, right),
                min(up, right),
                min(down, left),
            ];
            c += 1;
        }
        r += 1;
    }
    table
}
