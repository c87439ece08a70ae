//! 駒種（PieceType）

use serde::{Deserialize, Serialize};

use super::{Direction, MoveType};

/// 駒種（先後の区別なし）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum PieceType {
    // 生駒
    Pawn = 1,
    Lance = 2,
    Knight = 3,
    Silver = 4,
    Bishop = 5,
    Rook = 6,
    Gold = 7,
    King = 8,
    // 成駒
    ProPawn = 9,
    ProLance = 10,
    ProKnight = 11,
    ProSilver = 12,
    Horse = 13,  // 成角
    Dragon = 14, // 成飛
}

use Direction::*;
use MoveType::{Long, Short};

const PAWN_MOVES: &[(Direction, MoveType)] = &[(Up, Short)];
const LANCE_MOVES: &[(Direction, MoveType)] = &[(Up, Long)];
const KNIGHT_MOVES: &[(Direction, MoveType)] = &[(UpLeftKnight, Short), (UpRightKnight, Short)];
const SILVER_MOVES: &[(Direction, MoveType)] = &[
    (Up, Short),
    (UpLeft, Short),
    (UpRight, Short),
    (DownLeft, Short),
    (DownRight, Short),
];
const GOLD_MOVES: &[(Direction, MoveType)] = &[
    (Up, Short),
    (UpLeft, Short),
    (UpRight, Short),
    (Left, Short),
    (Right, Short),
    (Down, Short),
];
const BISHOP_MOVES: &[(Direction, MoveType)] =
    &[(UpLeft, Long), (UpRight, Long), (DownLeft, Long), (DownRight, Long)];
const ROOK_MOVES: &[(Direction, MoveType)] = &[(Up, Long), (Left, Long), (Right, Long), (Down, Long)];
const KING_MOVES: &[(Direction, MoveType)] = &[
    (Up, Short),
    (UpLeft, Short),
    (UpRight, Short),
    (Left, Short),
    (Right, Short),
    (Down, Short),
    (DownLeft, Short),
    (DownRight, Short),
];
const HORSE_MOVES: &[(Direction, MoveType)] = &[
    (Up, Short),
    (UpLeft, Long),
    (UpRight, Long),
    (Left, Short),
    (Right, Short),
    (Down, Short),
    (DownLeft, Long),
    (DownRight, Long),
];
const DRAGON_MOVES: &[(Direction, MoveType)] = &[
    (Up, Long),
    (UpLeft, Short),
    (UpRight, Short),
    (Left, Long),
    (Right, Long),
    (Down, Long),
    (DownLeft, Short),
    (DownRight, Short),
];

impl PieceType {
    /// 有効な駒種の数（1-14）
    pub const NUM: usize = 14;

    /// 全ての駒種
    pub const ALL: [PieceType; 14] = [
        PieceType::Pawn,
        PieceType::Lance,
        PieceType::Knight,
        PieceType::Silver,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Gold,
        PieceType::King,
        PieceType::ProPawn,
        PieceType::ProLance,
        PieceType::ProKnight,
        PieceType::ProSilver,
        PieceType::Horse,
        PieceType::Dragon,
    ];

    /// 成れるかどうか
    #[inline]
    pub const fn can_promote(self) -> bool {
        self.promote().is_some()
    }

    /// 成り駒を返す（成れない場合はNone）
    #[inline]
    pub const fn promote(self) -> Option<PieceType> {
        match self {
            PieceType::Pawn => Some(PieceType::ProPawn),
            PieceType::Lance => Some(PieceType::ProLance),
            PieceType::Knight => Some(PieceType::ProKnight),
            PieceType::Silver => Some(PieceType::ProSilver),
            PieceType::Bishop => Some(PieceType::Horse),
            PieceType::Rook => Some(PieceType::Dragon),
            _ => None,
        }
    }

    /// 生駒を返す（既に生駒の場合はそのまま）
    #[inline]
    pub const fn unpromote(self) -> PieceType {
        match self {
            PieceType::ProPawn => PieceType::Pawn,
            PieceType::ProLance => PieceType::Lance,
            PieceType::ProKnight => PieceType::Knight,
            PieceType::ProSilver => PieceType::Silver,
            PieceType::Horse => PieceType::Bishop,
            PieceType::Dragon => PieceType::Rook,
            _ => self,
        }
    }

    /// 成駒かどうか
    #[inline]
    pub const fn is_promoted(self) -> bool {
        self as u8 >= 9
    }

    /// 先手から見た利きの一覧（方向と移動の種類の組、順序固定）
    #[inline]
    pub const fn capabilities(self) -> &'static [(Direction, MoveType)] {
        match self {
            PieceType::Pawn => PAWN_MOVES,
            PieceType::Lance => LANCE_MOVES,
            PieceType::Knight => KNIGHT_MOVES,
            PieceType::Silver => SILVER_MOVES,
            PieceType::Bishop => BISHOP_MOVES,
            PieceType::Rook => ROOK_MOVES,
            PieceType::King => KING_MOVES,
            PieceType::Gold
            | PieceType::ProPawn
            | PieceType::ProLance
            | PieceType::ProKnight
            | PieceType::ProSilver => GOLD_MOVES,
            PieceType::Horse => HORSE_MOVES,
            PieceType::Dragon => DRAGON_MOVES,
        }
    }

    /// 識別子用の名前
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            PieceType::Pawn => "pawn",
            PieceType::Lance => "lance",
            PieceType::Knight => "knight",
            PieceType::Silver => "silver",
            PieceType::Bishop => "bishop",
            PieceType::Rook => "rook",
            PieceType::Gold => "gold",
            PieceType::King => "king",
            PieceType::ProPawn => "pro_pawn",
            PieceType::ProLance => "pro_lance",
            PieceType::ProKnight => "pro_knight",
            PieceType::ProSilver => "pro_silver",
            PieceType::Horse => "horse",
            PieceType::Dragon => "dragon",
        }
    }

    /// インデックス（1-14）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// u8から変換（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<PieceType> {
        if n >= 1 && n <= 14 {
            // SAFETY: 1 <= n <= 14 なので有効なPieceType値
            Some(unsafe { std::mem::transmute::<u8, PieceType>(n) })
        } else {
            None
        }
    }
}
