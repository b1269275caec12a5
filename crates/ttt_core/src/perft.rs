use crate::{board::Position, rules::classify};

/// Game-tree node count.
/// Counts leaves `depth` plies below the current position, where a finished
/// game is a leaf regardless of the remaining depth.
pub fn perft(pos: &mut Position, depth: u8) -> u64 {
    if depth == 0 || classify(pos).is_terminal() {
        return 1;
    }

    let side = pos.side_to_move();
    let mut nodes = 0u64;
    for mv in crate::types::Move::ALL {
        if !pos.cell(mv).is_empty() {
            continue;
        }
        pos.place(mv, side);
        nodes += perft(pos, depth - 1);
        pos.clear(mv);
    }
    nodes
}
