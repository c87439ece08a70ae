//! 盤面（Board）
//!
//! 升目から駒への写像。描画側からは不変の値として扱う。

use serde::{Deserialize, Serialize};

use crate::types::{Color, File, Piece, PieceType, Rank, Square};
use crate::usi::{UsiParseError, parse_sfen_board, piece_to_sfen};

/// 盤上の駒配置
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    squares: [Piece; Square::NUM],
}

impl Board {
    /// 駒のない盤面
    pub const fn empty() -> Board {
        Board {
            squares: [Piece::NONE; Square::NUM],
        }
    }

    /// 指定升の駒
    #[inline]
    pub fn at(&self, sq: Square) -> Option<Piece> {
        let pc = self.squares[sq.index()];
        if pc.is_none() { None } else { Some(pc) }
    }

    /// 指定升に駒があるか
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// 駒を置く（既存の駒は置き換える）
    #[inline]
    pub fn put_piece(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = piece;
    }

    /// 駒を取り除き、取り除いた駒を返す
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let pc = self.at(sq);
        self.squares[sq.index()] = Piece::NONE;
        pc
    }

    /// 駒のある升をインデックス昇順に列挙
    pub fn non_empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.is_occupied(sq))
    }

    /// 盤上の駒数
    pub fn count(&self) -> usize {
        self.squares.iter().filter(|pc| pc.is_some()).count()
    }

    /// 180度回転し先後を入れ替えた盤面
    ///
    /// 後手視点で見た同じ局面になる。
    pub fn rotated(&self) -> Board {
        let mut board = Board::empty();
        for sq in self.non_empty_squares() {
            let pc = self.squares[sq.index()];
            board.put_piece(sq.opposite(), pc.flipped());
        }
        board
    }

    /// 平手初期配置
    pub fn hirate() -> Board {
        let mut board = Board::empty();
        let back = [
            PieceType::Lance,
            PieceType::Knight,
            PieceType::Silver,
            PieceType::Gold,
            PieceType::King,
            PieceType::Gold,
            PieceType::Silver,
            PieceType::Knight,
            PieceType::Lance,
        ];
        for (file, pt) in File::ALL.into_iter().zip(back) {
            board.put_piece(Square::new(file, Rank::Rank9), Piece::new(Color::Black, pt));
            board.put_piece(Square::new(file, Rank::Rank1), Piece::new(Color::White, pt));
            board.put_piece(Square::new(file, Rank::Rank7), Piece::B_PAWN);
            board.put_piece(Square::new(file, Rank::Rank3), Piece::W_PAWN);
        }
        board.put_piece(Square::new(File::File2, Rank::Rank8), Piece::B_ROOK);
        board.put_piece(Square::new(File::File8, Rank::Rank8), Piece::B_BISHOP);
        board.put_piece(Square::new(File::File8, Rank::Rank2), Piece::W_ROOK);
        board.put_piece(Square::new(File::File2, Rank::Rank2), Piece::W_BISHOP);
        board
    }

    /// SFENの盤面部分から生成
    pub fn from_sfen(s: &str) -> Result<Board, UsiParseError> {
        parse_sfen_board(s)
    }

    /// SFENの盤面部分に変換
    pub fn to_sfen(&self) -> String {
        let mut out = String::new();
        for (i, rank) in Rank::ALL.into_iter().enumerate() {
            if i > 0 {
                out.push('/');
            }
            let mut empty = 0;
            // 9筋から1筋へ
            for file in File::ALL.into_iter().rev() {
                match self.at(Square::new(file, rank)) {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push_str(&piece_to_sfen(pc));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Board").field(&self.to_sfen()).finish()
    }
}

impl TryFrom<String> for Board {
    type Error = UsiParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Board::from_sfen(&s)
    }
}

impl From<Board> for String {
    fn from(board: Board) -> String {
        board.to_sfen()
    }
}
