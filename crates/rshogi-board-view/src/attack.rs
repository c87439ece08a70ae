//! 利きの計算
//!
//! 盤上の駒が動ける升の集合を求める。合法性（王手放置・ピン等）は考慮しない。

use rshogi_board_core::{Bitboard, Board, Color, MoveType};

/// `side` の駒が利いている升の集合
///
/// 近接の利きは隣の升だけ、遠方の利きは最初に駒がある升（敵味方を問わず）まで含めて伸ばす。
/// 盤外の升は含まない。
pub fn compute_attack_squares(board: &Board, side: Color) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for from in board.non_empty_squares() {
        let Some(piece) = board.at(from) else {
            continue;
        };
        if piece.color() != side {
            continue;
        }
        for (direction, move_type) in piece.movable_directions() {
            match move_type {
                MoveType::Short => {
                    if let Some(to) = from.neighbor(direction) {
                        attacks.insert(to);
                    }
                }
                MoveType::Long => {
                    let mut next = from.neighbor(direction);
                    while let Some(to) = next {
                        attacks.insert(to);
                        if board.is_occupied(to) {
                            break;
                        }
                        next = to.neighbor(direction);
                    }
                }
            }
        }
    }
    attacks
}
