//! 段（Rank）

/// 段（1段〜9段）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    Rank1 = 0,
    Rank2 = 1,
    Rank3 = 2,
    Rank4 = 3,
    Rank5 = 4,
    Rank6 = 5,
    Rank7 = 6,
    Rank8 = 7,
    Rank9 = 8,
}

impl Rank {
    /// 段の数
    pub const NUM: usize = 9;

    /// 全ての段
    pub const ALL: [Rank; 9] = [
        Rank::Rank1,
        Rank::Rank2,
        Rank::Rank3,
        Rank::Rank4,
        Rank::Rank5,
        Rank::Rank6,
        Rank::Rank7,
        Rank::Rank8,
        Rank::Rank9,
    ];

    /// u8からRankに変換
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Rank> {
        if n < 9 {
            // SAFETY: n < 9 なので有効なRank値
            Some(unsafe { std::mem::transmute::<u8, Rank>(n) })
        } else {
            None
        }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 段の番号（1-9）
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// 漢数字表記（"一"〜"九"）
    #[inline]
    pub const fn kanji(self) -> &'static str {
        match self {
            Rank::Rank1 => "一",
            Rank::Rank2 => "二",
            Rank::Rank3 => "三",
            Rank::Rank4 => "四",
            Rank::Rank5 => "五",
            Rank::Rank6 => "六",
            Rank::Rank7 => "七",
            Rank::Rank8 => "八",
            Rank::Rank9 => "九",
        }
    }

    /// USI形式の文字（'a'-'i'）に変換
    #[inline]
    pub const fn to_usi_char(self) -> char {
        (b'a' + self as u8) as char
    }

    /// USI形式の文字からRankに変換
    #[inline]
    pub const fn from_usi_char(c: char) -> Option<Rank> {
        let n = (c as u8).wrapping_sub(b'a');
        Rank::from_u8(n)
    }
}
