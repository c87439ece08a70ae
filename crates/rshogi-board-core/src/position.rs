//! 局面（Position）

use crate::board::Board;
use crate::types::Color;
use crate::usi::{UsiParseError, parse_sfen};

/// SFENから読み込んだ局面
///
/// 盤面描画に使うのは駒配置と手番のみ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// 駒配置
    pub board: Board,
    /// 手番
    pub side_to_move: Color,
    /// 手数（1始まり）
    pub move_number: u32,
}

impl Position {
    /// 平手初期局面
    pub fn startpos() -> Position {
        Position {
            board: Board::hirate(),
            side_to_move: Color::Black,
            move_number: 1,
        }
    }

    /// SFEN（または "startpos"）から生成
    pub fn from_sfen(sfen: &str) -> Result<Position, UsiParseError> {
        parse_sfen(sfen)
    }

    /// SFEN形式に変換（持ち駒は "-" になる）
    pub fn to_sfen(&self) -> String {
        let side = match self.side_to_move {
            Color::Black => 'b',
            Color::White => 'w',
        };
        format!("{} {side} - {}", self.board.to_sfen(), self.move_number)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::startpos()
    }
}
