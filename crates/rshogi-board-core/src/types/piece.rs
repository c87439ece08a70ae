//! 駒（Piece）
//!
//! 内部表現は 5bit ラッパー。
//! - bit 0-3: `PieceType`（1..=14）。0 は `Piece::NONE` のみで使用される。
//! - bit 4: `Color`（0 = Black, 1 = White）。
//!
//! `Piece::NONE` 以外の値は常に有効な `PieceType` / `Color` の組み合わせであることを前提とする。
//! `piece_type()` を呼び出す前に `is_none()` を避けるのが契約。

use super::{Color, Direction, MoveType, PieceType};

/// 駒（先後の区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Piece(u8);

impl Piece {
    /// 駒なし
    pub const NONE: Piece = Piece(0);

    // 先手の駒
    pub const B_PAWN: Piece = Piece(1);
    pub const B_LANCE: Piece = Piece(2);
    pub const B_KNIGHT: Piece = Piece(3);
    pub const B_SILVER: Piece = Piece(4);
    pub const B_BISHOP: Piece = Piece(5);
    pub const B_ROOK: Piece = Piece(6);
    pub const B_GOLD: Piece = Piece(7);
    pub const B_KING: Piece = Piece(8);
    pub const B_PRO_PAWN: Piece = Piece(9);
    pub const B_HORSE: Piece = Piece(13);
    pub const B_DRAGON: Piece = Piece(14);

    // 後手の駒（+16）
    pub const W_PAWN: Piece = Piece(17);
    pub const W_LANCE: Piece = Piece(18);
    pub const W_KNIGHT: Piece = Piece(19);
    pub const W_SILVER: Piece = Piece(20);
    pub const W_BISHOP: Piece = Piece(21);
    pub const W_ROOK: Piece = Piece(22);
    pub const W_GOLD: Piece = Piece(23);
    pub const W_KING: Piece = Piece(24);
    pub const W_HORSE: Piece = Piece(29);
    pub const W_DRAGON: Piece = Piece(30);

    /// ColorとPieceTypeから生成
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece(piece_type as u8 | ((color as u8) << 4))
    }

    /// 駒種を取得
    #[inline]
    pub const fn piece_type(self) -> PieceType {
        debug_assert!(self.0 != 0, "piece_type() called on Piece::NONE");
        // SAFETY: NONE 以外では self.0 & 0x0F は 1..=14 なので有効なPieceType値
        unsafe { std::mem::transmute(self.0 & 0x0F) }
    }

    /// 手番を取得
    #[inline]
    pub const fn color(self) -> Color {
        // SAFETY: (self.0 >> 4) & 1 は 0 or 1 なので有効なColor値
        unsafe { std::mem::transmute((self.0 >> 4) & 1) }
    }

    /// 駒がないか
    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// 駒があるか
    #[inline]
    pub const fn is_some(self) -> bool {
        self.0 != 0
    }

    /// 成り駒を返す（成れない駒はそのまま）
    #[inline]
    pub const fn promoted(self) -> Piece {
        match self.piece_type().promote() {
            Some(pt) => Piece::new(self.color(), pt),
            None => self,
        }
    }

    /// 生駒を返す
    #[inline]
    pub const fn unpromoted(self) -> Piece {
        Piece::new(self.color(), self.piece_type().unpromote())
    }

    /// 手番を入れ替えた駒
    #[inline]
    pub const fn flipped(self) -> Piece {
        Piece::new(self.color().opponent(), self.piece_type())
    }

    /// この駒の利き（方向と移動の種類）
    ///
    /// 後手の駒は先手の利きを180度反転したものになる。
    pub fn movable_directions(self) -> impl Iterator<Item = (Direction, MoveType)> {
        let color = self.color();
        self.piece_type().capabilities().iter().map(move |&(dir, move_type)| match color {
            Color::Black => (dir, move_type),
            Color::White => (dir.reverse(), move_type),
        })
    }

    /// 指定方向の移動の種類（その方向に動けなければ None）
    pub fn resolve_move_type(self, direction: Direction) -> Option<MoveType> {
        self.movable_directions()
            .find(|&(dir, _)| dir == direction)
            .map(|(_, move_type)| move_type)
    }

    /// 識別子（"black_pawn" 等）
    pub fn id(self) -> String {
        format!("{}_{}", self.color().name(), self.piece_type().name())
    }

    /// インデックス（0-30、0は無効）
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::NONE
    }
}
