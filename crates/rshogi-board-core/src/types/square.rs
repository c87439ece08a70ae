//! 升目（Square）

use super::{Direction, File, Rank};

/// 升目（0-80）
///
/// 配置: 縦型
/// SQ_11(1一)=0, SQ_12(1二)=1, ..., SQ_19(1九)=8, SQ_21(2一)=9, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 81;

    /// 1一
    pub const SQ_11: Square = Square(0);
    /// 5五（中央）
    pub const SQ_55: Square = Square(40);
    /// 9九
    pub const SQ_99: Square = Square(80);

    /// FileとRankからSquareを生成
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(file as u8 * 9 + rank as u8)
    }

    /// 筋を取得
    #[inline]
    pub const fn file(self) -> File {
        // SAFETY: self.0 / 9 は 0..=8 なので有効なFile値
        unsafe { std::mem::transmute(self.0 / 9) }
    }

    /// 段を取得
    #[inline]
    pub const fn rank(self) -> Rank {
        // SAFETY: self.0 % 9 は 0..=8 なので有効なRank値
        unsafe { std::mem::transmute(self.0 % 9) }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Square> {
        if n < 81 { Some(Square(n)) } else { None }
    }

    /// 180度回転した升（盤を反転表示するときの対応升）
    #[inline]
    pub const fn opposite(self) -> Square {
        Square(80 - self.0)
    }

    /// 表示上の列（0 = 左端の9筋, 8 = 右端の1筋）
    #[inline]
    pub const fn x(self) -> u8 {
        8 - self.0 / 9
    }

    /// 表示上の行（0 = 上端の1段, 8 = 下端の9段）
    #[inline]
    pub const fn y(self) -> u8 {
        self.0 % 9
    }

    /// 指定方向の隣の升（盤外なら None）
    #[inline]
    pub const fn neighbor(self, direction: Direction) -> Option<Square> {
        let (df, dr) = direction.delta();
        let file = (self.0 / 9) as i8 + df;
        let rank = (self.0 % 9) as i8 + dr;
        if file < 0 || file > 8 || rank < 0 || rank > 8 {
            return None;
        }
        Some(Square(file as u8 * 9 + rank as u8))
    }

    /// USI形式の文字列（"7g"等）に変換
    pub fn to_usi(self) -> String {
        let file = self.file().to_usi_char();
        let rank = self.rank().to_usi_char();
        format!("{file}{rank}")
    }

    /// USI形式の文字列からSquareに変換
    pub fn from_usi(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let file = File::from_usi_char(chars.next()?)?;
        let rank = Rank::from_usi_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Square::new(file, rank))
    }

    /// 全ての升を返すイテレータ
    pub fn all() -> impl Iterator<Item = Square> {
        (0..81).map(Square)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file().to_usi_char(), self.rank().to_usi_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_new() {
        assert_eq!(Square::new(File::File1, Rank::Rank1), Square::SQ_11);
        assert_eq!(Square::new(File::File5, Rank::Rank5), Square::SQ_55);
        assert_eq!(Square::new(File::File9, Rank::Rank9), Square::SQ_99);
    }

    #[test]
    fn test_square_file_rank() {
        let sq = Square::new(File::File3, Rank::Rank7);
        assert_eq!(sq.file(), File::File3);
        assert_eq!(sq.rank(), Rank::Rank7);
    }

    #[test]
    fn test_square_opposite() {
        assert_eq!(Square::SQ_11.opposite(), Square::SQ_99);
        assert_eq!(Square::SQ_99.opposite(), Square::SQ_11);
        assert_eq!(Square::SQ_55.opposite(), Square::SQ_55);
        for sq in Square::all() {
            assert_eq!(sq.opposite().opposite(), sq);
        }
    }

    #[test]
    fn test_square_display_coordinates() {
        // 9一は左上、1九は右下
        let top_left = Square::new(File::File9, Rank::Rank1);
        assert_eq!((top_left.x(), top_left.y()), (0, 0));
        let bottom_right = Square::new(File::File1, Rank::Rank9);
        assert_eq!((bottom_right.x(), bottom_right.y()), (8, 8));
        // 反転すると表示座標も点対称になる
        for sq in Square::all() {
            assert_eq!(sq.opposite().x(), 8 - sq.x());
            assert_eq!(sq.opposite().y(), 8 - sq.y());
        }
    }

    #[test]
    fn test_square_neighbor() {
        let sq = Square::SQ_55;
        assert_eq!(sq.neighbor(Direction::Up), Some(Square::new(File::File5, Rank::Rank4)));
        assert_eq!(sq.neighbor(Direction::Left), Some(Square::new(File::File6, Rank::Rank5)));
        assert_eq!(
            sq.neighbor(Direction::UpRightKnight),
            Some(Square::new(File::File4, Rank::Rank3))
        );

        // 盤外
        assert_eq!(Square::SQ_11.neighbor(Direction::Up), None);
        assert_eq!(Square::SQ_11.neighbor(Direction::Right), None);
        assert_eq!(Square::SQ_99.neighbor(Direction::Down), None);
        assert_eq!(Square::SQ_99.neighbor(Direction::Left), None);
        let sq12 = Square::new(File::File1, Rank::Rank2);
        assert_eq!(sq12.neighbor(Direction::UpLeftKnight), None);
    }

    #[test]
    fn test_square_usi() {
        assert_eq!(Square::new(File::File7, Rank::Rank7).to_usi(), "7g");
        assert_eq!(Square::from_usi("7g"), Some(Square::new(File::File7, Rank::Rank7)));
        assert_eq!(Square::from_usi("1a"), Some(Square::SQ_11));
        assert_eq!(Square::from_usi("9i"), Some(Square::SQ_99));
        assert_eq!(Square::from_usi(""), None);
        assert_eq!(Square::from_usi("0a"), None);
        assert_eq!(Square::from_usi("1a1"), None);
        assert_eq!(Square::SQ_55.to_string(), "5e");
    }

    #[test]
    fn test_square_all() {
        let all: Vec<_> = Square::all().collect();
        assert_eq!(all.len(), 81);
        assert_eq!(all[0], Square::SQ_11);
        assert_eq!(all[80], Square::SQ_99);
    }
}
