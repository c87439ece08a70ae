//! 基本型モジュール
//!
//! 盤面描画で使用する基本的な型を定義する。
//!
//! # 型の依存関係
//!
//! ```text
//! Color
//!   ↓
//! File, Rank, Direction/MoveType
//!   ↓
//! Square
//!   ↓
//! PieceType
//!   ↓
//! Piece ← Move
//! ```

mod color;
mod direction;
mod file;
mod moves;
mod piece;
mod piece_type;
mod rank;
mod square;

pub use color::Color;
pub use direction::{Direction, MoveType};
pub use file::File;
pub use moves::Move;
pub use piece::Piece;
pub use piece_type::PieceType;
pub use rank::Rank;
pub use square::Square;
