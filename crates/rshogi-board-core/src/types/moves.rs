//! 指し手（Move）

use super::{Color, PieceType, Square};

/// 指し手
///
/// 描画用なので合法性は問わない。駒打ちは `from` が `None` になる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// 指した側
    pub color: Color,
    /// 動かした駒の駒種（成る場合は成る前の駒種）
    pub piece_type: PieceType,
    /// 移動元（駒打ちの場合は None）
    pub from: Option<Square>,
    /// 移動先
    pub to: Square,
    /// 成りフラグ
    pub promote: bool,
}

impl Move {
    /// 盤上の駒を動かす指し手を生成
    #[inline]
    pub const fn normal(
        color: Color,
        piece_type: PieceType,
        from: Square,
        to: Square,
        promote: bool,
    ) -> Move {
        Move {
            color,
            piece_type,
            from: Some(from),
            to,
            promote,
        }
    }

    /// 駒打ちの指し手を生成
    #[inline]
    pub const fn drop(color: Color, piece_type: PieceType, to: Square) -> Move {
        Move {
            color,
            piece_type,
            from: None,
            to,
            promote: false,
        }
    }

    /// 駒打ちかどうか
    #[inline]
    pub const fn is_drop(&self) -> bool {
        self.from.is_none()
    }

    /// USI形式（"7g7f", "7g7f+", "P*5e"）に変換
    pub fn to_usi(&self) -> String {
        match self.from {
            Some(from) => {
                let suffix = if self.promote { "+" } else { "" };
                format!("{from}{}{suffix}", self.to)
            }
            None => {
                let c = match self.piece_type.unpromote() {
                    PieceType::Pawn => 'P',
                    PieceType::Lance => 'L',
                    PieceType::Knight => 'N',
                    PieceType::Silver => 'S',
                    PieceType::Gold => 'G',
                    PieceType::Bishop => 'B',
                    PieceType::Rook => 'R',
                    _ => 'K',
                };
                format!("{c}*{}", self.to)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{File, Rank};

    #[test]
    fn test_move_normal() {
        let from = Square::new(File::File7, Rank::Rank7);
        let to = Square::new(File::File7, Rank::Rank6);
        let mv = Move::normal(Color::Black, PieceType::Pawn, from, to, false);
        assert!(!mv.is_drop());
        assert_eq!(mv.from, Some(from));
        assert_eq!(mv.piece_type, PieceType::Pawn);
        assert_eq!(mv.to_usi(), "7g7f");
    }

    #[test]
    fn test_move_drop() {
        let mv = Move::drop(Color::White, PieceType::Silver, Square::SQ_55);
        assert!(mv.is_drop());
        assert_eq!(mv.from, None);
        assert_eq!(mv.to_usi(), "S*5e");
    }

    #[test]
    fn test_move_promote_usi() {
        let from = Square::new(File::File2, Rank::Rank3);
        let to = Square::new(File::File2, Rank::Rank2);
        let mv = Move::normal(Color::Black, PieceType::Pawn, from, to, true);
        assert_eq!(mv.to_usi(), "2c2b+");
    }
}
