// SPDX-License-Identifier: MIT OR Apache-2.0

//! SOS formation detection

use crate::{board::Board, Coord, Formation, Mark};

/// Unit offsets in compass order: NW, N, NE, E, SE, S, SW, W.
///
/// The first four are the halves used when an O lands in the middle; the
/// last four are their opposites.
pub const OFFSETS: [(i32, i32); 8] = [
    (-1, -1), // north west
    (0, -1),  // north
    (1, -1),  // north east
    (1, 0),   //       east
    (1, 1),   // south east
    (0, 1),   // south
    (-1, 1),  // south west
    (-1, 0),  //       west
];

/// Formations completed by placing `mark` at `coord` on behalf of `player_id`.
///
/// An S completes a line when it is the first letter of S-O-S running
/// outward; an O completes one when both neighbours along an axis are S.
/// Off-grid neighbours read as `Mark::None` and never match.
pub fn detect_formations(board: &Board, coord: Coord, mark: Mark, player_id: usize) -> Vec<Formation> {
    let mut found = Vec::new();

    match mark {
        Mark::S => {
            for offset in OFFSETS {
                let end = coord.offset(offset, 2);
                if board.mark_at(coord.offset(offset, 1)) == Mark::O
                    && board.mark_at(end) == Mark::S
                {
                    found.extend(Formation::new(coord, end, player_id).ok());
                }
            }
        }
        Mark::O => {
            for offset in &OFFSETS[..4] {
                let ahead = coord.offset(*offset, 1);
                let behind = coord.offset(*offset, -1);
                if board.mark_at(ahead) == Mark::S && board.mark_at(behind) == Mark::S {
                    found.extend(Formation::new(ahead, behind, player_id).ok());
                }
            }
        }
        Mark::None | Mark::Empty => {}
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_pair_with_opposites() {
        for (i, (dx, dy)) in OFFSETS.iter().take(4).enumerate() {
            assert_eq!(OFFSETS[i + 4], (-dx, -dy));
        }
    }

    #[test]
    fn test_empty_mark_detects_nothing() {
        let mut board = Board::new(3, 3).unwrap();
        board.set_mark(Coord::new(0, 1), Mark::S).unwrap();
        board.set_mark(Coord::new(2, 1), Mark::S).unwrap();
        assert!(detect_formations(&board, Coord::new(1, 1), Mark::Empty, 0).is_empty());
    }

    #[test]
    fn test_s_eight_directions() {
        // S in the middle of a 5x5 ring of O's with S's on the rim
        let mut board = Board::new(5, 5).unwrap();
        let centre = Coord::new(2, 2);
        for offset in OFFSETS {
            board.set_mark(centre.offset(offset, 1), Mark::O).unwrap();
            board.set_mark(centre.offset(offset, 2), Mark::S).unwrap();
        }
        let found = detect_formations(&board, centre, Mark::S, 1);
        assert_eq!(found.len(), 8);
        assert!(found.iter().all(|f| f.p1() == centre && f.player_id() == 1));
        assert_eq!(found[0].p2(), Coord::new(0, 0));
    }

    #[test]
    fn test_s_near_edge_reads_none() {
        let mut board = Board::new(3, 3).unwrap();
        board.set_mark(Coord::new(1, 0), Mark::O).unwrap();
        // (2,0) + 2*E is off the grid
        assert!(detect_formations(&board, Coord::new(0, 0), Mark::S, 0).is_empty());
    }
}
