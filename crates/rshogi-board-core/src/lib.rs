//! 将棋盤描画用の盤面モデル
//!
//! 盤面レイアウト計算が参照する駒・升・指し手の表現を提供する。
//! 合法手判定や局面の更新は扱わない。
//!
//! - [`types`]: `Color`, `File`, `Rank`, `Square`, `Direction`, `PieceType`, `Piece`, `Move`
//! - [`board`]: 升目から駒への写像 `Board`
//! - [`bitboard`]: 升目集合 `Bitboard`
//! - [`usi`]: USI/SFEN 表記の解析

pub mod bitboard;
pub mod board;
pub mod position;
pub mod types;
pub mod usi;

pub use bitboard::Bitboard;
pub use board::Board;
pub use position::Position;
pub use types::{Color, Direction, File, Move, MoveType, Piece, PieceType, Rank, Square};
pub use usi::{
    SFEN_HIRATE, UsiParseError, parse_sfen, parse_sfen_piece, parse_usi_move, parse_usi_square,
};
