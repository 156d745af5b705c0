// The computer opponent. Selection only: it is handed the legal-move list
// and picks one element, uniformly at random.

use rand::seq::SliceRandom;

use crate::board::Move;

pub fn choose_move(legal: &[Move]) -> Option<Move> {
    legal.choose(&mut rand::thread_rng()).copied()
}
