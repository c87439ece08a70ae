//! ビットボード
//!
//! 81マスの升目集合を128bitで表現する。bit n が `Square` のインデックス n に対応する。

use crate::types::Square;

/// 81マスの升目集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(u128);

impl Bitboard {
    /// 空集合
    pub const EMPTY: Bitboard = Bitboard(0);

    /// 盤上81マス全て
    pub const ALL: Bitboard = Bitboard((1u128 << 81) - 1);

    /// 升を追加
    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u128 << sq.index();
    }

    /// 升を含むか
    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1u128 << sq.index()) != 0
    }

    /// 要素数
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// 空集合か
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// インデックス昇順のイテレータ
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self.0)
    }
}

/// [`Bitboard`] の升を昇順に返すイテレータ
pub struct BitboardIter(u128);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros();
        self.0 &= self.0 - 1;
        Square::from_u8(index as u8)
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        self.iter()
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = Bitboard::EMPTY;
        for sq in iter {
            bb.insert(sq);
        }
        bb
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_contains() {
        let mut bb = Bitboard::EMPTY;
        assert!(bb.is_empty());
        bb.insert(Square::SQ_55);
        bb.insert(Square::SQ_99);
        bb.insert(Square::SQ_55);
        assert!(bb.contains(Square::SQ_55));
        assert!(bb.contains(Square::SQ_99));
        assert!(!bb.contains(Square::SQ_11));
        assert_eq!(bb.count(), 2);
    }

    #[test]
    fn test_iter_ascending() {
        let bb: Bitboard = [Square::SQ_99, Square::SQ_11, Square::SQ_55].into_iter().collect();
        let squares: Vec<_> = bb.iter().collect();
        assert_eq!(squares, vec![Square::SQ_11, Square::SQ_55, Square::SQ_99]);
    }

    #[test]
    fn test_all() {
        assert_eq!(Bitboard::ALL.count(), 81);
        assert_eq!(Bitboard::ALL.iter().count(), 81);
    }

    #[test]
    fn test_set_ops() {
        let a: Bitboard = [Square::SQ_11, Square::SQ_55].into_iter().collect();
        let b: Bitboard = [Square::SQ_55, Square::SQ_99].into_iter().collect();
        assert_eq!((a | b).count(), 3);
        assert_eq!((a & b).iter().collect::<Vec<_>>(), vec![Square::SQ_55]);
    }
}
