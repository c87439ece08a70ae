//! USI notation parsing and formatting
//!
//! 盤面描画に必要な範囲（升・指し手・SFEN）だけを扱う。

use crate::board::Board;
use crate::position::Position;
use crate::types::{Color, File, Move, Piece, PieceType, Rank, Square};

/// 平手初期局面のSFEN
pub const SFEN_HIRATE: &str = "lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL b - 1";

/// Error type for USI parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsiParseError {
    #[error("Invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("Invalid piece character: {0}")]
    InvalidPiece(char),

    #[error("Invalid move format: {0}")]
    InvalidMoveFormat(String),

    #[error("No piece to move at {0}")]
    NoPieceToMove(String),

    #[error("Invalid SFEN: {0}")]
    InvalidSfen(String),

    #[error("Invalid rank count: {0} (expected 9)")]
    InvalidRankCount(usize),

    #[error("Invalid move count: {0}")]
    InvalidMoveCount(String),

    #[error("Invalid side to move: {0} (expected 'b' or 'w')")]
    InvalidSideToMove(String),
}

/// Parse a USI square notation (e.g., "5e", "1a") to Square
pub fn parse_usi_square(s: &str) -> Result<Square, UsiParseError> {
    Square::from_usi(s).ok_or_else(|| UsiParseError::InvalidSquare(s.to_string()))
}

/// Parse a USI piece character to PieceType
fn parse_usi_piece_type(c: char) -> Result<PieceType, UsiParseError> {
    match c.to_ascii_uppercase() {
        'P' => Ok(PieceType::Pawn),
        'L' => Ok(PieceType::Lance),
        'N' => Ok(PieceType::Knight),
        'S' => Ok(PieceType::Silver),
        'G' => Ok(PieceType::Gold),
        'B' => Ok(PieceType::Bishop),
        'R' => Ok(PieceType::Rook),
        'K' => Ok(PieceType::King),
        _ => Err(UsiParseError::InvalidPiece(c)),
    }
}

/// Convert a piece to its SFEN notation ("P", "+r", ...)
pub fn piece_to_sfen(piece: Piece) -> String {
    let pt = piece.piece_type();
    let c = match pt.unpromote() {
        PieceType::Pawn => 'P',
        PieceType::Lance => 'L',
        PieceType::Knight => 'N',
        PieceType::Silver => 'S',
        PieceType::Gold => 'G',
        PieceType::Bishop => 'B',
        PieceType::Rook => 'R',
        _ => 'K',
    };
    let c = match piece.color() {
        Color::Black => c,
        Color::White => c.to_ascii_lowercase(),
    };
    if pt.is_promoted() { format!("+{c}") } else { c.to_string() }
}

/// Parse a USI move notation (e.g., "7g7f", "7g7f+", "P*5e")
///
/// USIの指し手には手番も駒種も含まれないため `board` から補う。
/// 通常の指し手は移動元の駒を使い、移動元が空なら移動先の駒を使う
/// （指した後の局面に対して直前の指し手を解釈する場合）。
/// 駒打ちの手番は移動先の駒から、空なら `fallback_color` を使う。
pub fn parse_usi_move(
    s: &str,
    board: &Board,
    fallback_color: Color,
) -> Result<Move, UsiParseError> {
    if let Some((piece, to)) = s.split_once('*') {
        let mut chars = piece.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(UsiParseError::InvalidMoveFormat(s.to_string()));
        };
        let piece_type = parse_usi_piece_type(c)?;
        if piece_type == PieceType::King {
            return Err(UsiParseError::InvalidMoveFormat(s.to_string()));
        }
        let to = parse_usi_square(to)?;
        let color = board.at(to).map_or(fallback_color, |pc| pc.color());
        return Ok(Move::drop(color, piece_type, to));
    }

    let (body, promote) = match s.strip_suffix('+') {
        Some(stripped) => (stripped, true),
        None => (s, false),
    };
    if body.len() != 4 || !body.is_ascii() {
        return Err(UsiParseError::InvalidMoveFormat(s.to_string()));
    }
    let from = parse_usi_square(&body[0..2])?;
    let to = parse_usi_square(&body[2..4])?;
    let piece = board
        .at(from)
        .or_else(|| board.at(to))
        .ok_or_else(|| UsiParseError::NoPieceToMove(s.to_string()))?;
    let piece_type = if promote && board.at(from).is_none() {
        // 指した後の局面では成った後の駒が置かれている
        piece.piece_type().unpromote()
    } else {
        piece.piece_type()
    };
    Ok(Move::normal(piece.color(), piece_type, from, to, promote))
}

/// Parse a single SFEN piece ("P", "+r", ...)
pub fn parse_sfen_piece(s: &str) -> Result<Piece, UsiParseError> {
    let (body, promoted) = match s.strip_prefix('+') {
        Some(rest) => (rest, true),
        None => (s, false),
    };
    let mut chars = body.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(UsiParseError::InvalidSfen(s.to_string()));
    };
    let color = if c.is_ascii_uppercase() { Color::Black } else { Color::White };
    let mut piece_type = parse_usi_piece_type(c)?;
    if promoted {
        piece_type = piece_type.promote().ok_or(UsiParseError::InvalidPiece(c))?;
    }
    Ok(Piece::new(color, piece_type))
}

/// Parse the board part of a SFEN string
pub fn parse_sfen_board(s: &str) -> Result<Board, UsiParseError> {
    let ranks: Vec<&str> = s.split('/').collect();
    if ranks.len() != Rank::NUM {
        return Err(UsiParseError::InvalidRankCount(ranks.len()));
    }

    let mut board = Board::empty();
    // 1段目から9段目へ、各段は9筋から1筋へ
    for (rank, rank_str) in Rank::ALL.into_iter().zip(ranks) {
        let mut col = 0u8;
        let mut promoted = false;
        for c in rank_str.chars() {
            if col >= 9 {
                return Err(UsiParseError::InvalidSfen(format!(
                    "Rank {} has too many squares",
                    rank.number()
                )));
            }
            if let Some(count) = c.to_digit(10) {
                if promoted || count == 0 || col as u32 + count > 9 {
                    return Err(UsiParseError::InvalidSfen(format!(
                        "Rank {} has invalid empty square count: {c}",
                        rank.number()
                    )));
                }
                col += count as u8;
            } else if c == '+' {
                if promoted {
                    return Err(UsiParseError::InvalidSfen("Duplicated '+'".to_string()));
                }
                promoted = true;
            } else {
                let color = if c.is_ascii_uppercase() { Color::Black } else { Color::White };
                let mut piece_type = parse_usi_piece_type(c)?;
                if promoted {
                    piece_type = piece_type.promote().ok_or(UsiParseError::InvalidPiece(c))?;
                    promoted = false;
                }
                let file = File::from_u8(8 - col)
                    .ok_or_else(|| UsiParseError::InvalidSfen(s.to_string()))?;
                board.put_piece(Square::new(file, rank), Piece::new(color, piece_type));
                col += 1;
            }
        }
        if promoted {
            return Err(UsiParseError::InvalidSfen("Incomplete promoted piece".to_string()));
        }
        if col != 9 {
            return Err(UsiParseError::InvalidSfen(format!(
                "Rank {} has wrong number of squares: expected 9, got {col}",
                rank.number()
            )));
        }
    }
    Ok(board)
}

/// Parse a SFEN string (or "startpos") to create a Position
///
/// 持ち駒は描画対象外のため読み飛ばす。
pub fn parse_sfen(sfen: &str) -> Result<Position, UsiParseError> {
    let sfen = sfen.trim();
    let sfen = if sfen == "startpos" { SFEN_HIRATE } else { sfen };
    let sfen = sfen.strip_prefix("sfen ").unwrap_or(sfen);

    let parts: Vec<&str> = sfen.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(UsiParseError::InvalidSfen("Too few parts".to_string()));
    }

    let board = parse_sfen_board(parts[0])?;
    let side_to_move = match parts[1] {
        "b" => Color::Black,
        "w" => Color::White,
        other => return Err(UsiParseError::InvalidSideToMove(other.to_string())),
    };
    let move_number = match parts.get(3) {
        Some(n) => match n.parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => return Err(UsiParseError::InvalidMoveCount(n.to_string())),
        },
        None => 1,
    };

    Ok(Position {
        board,
        side_to_move,
        move_number,
    })
}
