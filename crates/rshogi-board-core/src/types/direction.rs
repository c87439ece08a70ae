//! 方向（Direction）と移動の種類（MoveType）
//!
//! 方向は盤面に対する絶対方向で、先手から見て「上」が1段側、
//! 「左」が9筋側になる。後手の駒の利きは [`Direction::reverse`] で反転して扱う。

/// 盤上の方向（桂馬の跳びを含む12方向）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    UpLeft,
    UpRight,
    Left,
    Right,
    Down,
    DownLeft,
    DownRight,
    UpLeftKnight,
    UpRightKnight,
    DownLeftKnight,
    DownRightKnight,
}

impl Direction {
    /// 方向の数
    pub const NUM: usize = 12;

    /// 全ての方向
    pub const ALL: [Direction; 12] = [
        Direction::Up,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::DownLeft,
        Direction::DownRight,
        Direction::UpLeftKnight,
        Direction::UpRightKnight,
        Direction::DownLeftKnight,
        Direction::DownRightKnight,
    ];

    /// (筋の変化量, 段の変化量)
    ///
    /// 筋は9筋側（左）が正、段は9段側（下）が正。
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::UpLeft => (1, -1),
            Direction::UpRight => (-1, -1),
            Direction::Left => (1, 0),
            Direction::Right => (-1, 0),
            Direction::Down => (0, 1),
            Direction::DownLeft => (1, 1),
            Direction::DownRight => (-1, 1),
            Direction::UpLeftKnight => (1, -2),
            Direction::UpRightKnight => (-1, -2),
            Direction::DownLeftKnight => (1, 2),
            Direction::DownRightKnight => (-1, 2),
        }
    }

    /// 180度反転した方向
    #[inline]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
            Direction::UpLeftKnight => Direction::DownRightKnight,
            Direction::UpRightKnight => Direction::DownLeftKnight,
            Direction::DownLeftKnight => Direction::UpRightKnight,
            Direction::DownRightKnight => Direction::UpLeftKnight,
        }
    }
}

/// 移動の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    /// 1マスだけ動ける
    Short,
    /// 駒にぶつかるか盤端まで進める（香角飛馬龍）
    Long,
}
