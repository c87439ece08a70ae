//! 盤面レイアウトの出力レコード
//!
//! いずれも描画層がそのまま消費する値オブジェクトで、振る舞いは持たない。
//! 座標と寸法は倍率適用済みのピクセル値。

use serde::Serialize;

/// 点
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }
}

/// 矩形（左上座標と寸法）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(origin: Point, width: f64, height: f64) -> Rect {
        Rect {
            left: origin.x,
            top: origin.y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// `outer` に完全に収まっているか
    pub fn is_within(&self, outer: &Rect) -> bool {
        self.left >= outer.left
            && self.top >= outer.top
            && self.right() <= outer.right()
            && self.bottom() <= outer.bottom()
    }
}

/// 盤面の背景
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardBackground {
    pub grid_color: String,
    pub texture_image_path: Option<String>,
    pub background_color: String,
    pub opacity: f64,
    pub rect: Rect,
}

/// ラベルの文字スタイル
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelStyle {
    pub left: f64,
    pub top: f64,
    pub font_size: f64,
    pub color: String,
    pub bold: bool,
    /// 白い影のずれ量とぼかし幅
    pub shadow: f64,
}

/// 段・筋ラベル
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardLabel {
    /// "rank1".."rank9", "file1".."file9"
    pub id: String,
    pub character: String,
    pub style: LabelStyle,
}

/// 盤上の駒
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardPiece {
    /// 駒と升から合成した識別子（"black_pawn60" 等）
    pub id: String,
    pub image_path: String,
    pub rect: Rect,
}

/// 升目の背景（重ね合わせ済みのスタイル）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellStyle {
    pub rect: Rect,
    pub background_color: Option<String>,
    pub opacity: Option<f64>,
}

impl CellStyle {
    /// 着色されていないか
    pub fn is_plain(&self) -> bool {
        self.background_color.is_none() && self.opacity.is_none()
    }
}

/// 升目
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSquare {
    /// 升のインデックス（0-80）
    pub id: usize,
    /// 筋（1-9）
    pub file: u8,
    /// 段（1-9）
    pub rank: u8,
    pub rect: Rect,
    pub background: CellStyle,
}

/// 成り・不成の選択肢
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Promotion {
    pub image_path: String,
    pub rect: Rect,
}

/// 1回の描画分のレイアウト
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardLayout {
    pub background: BoardBackground,
    pub labels: Vec<BoardLabel>,
    pub pieces: Vec<BoardPiece>,
    /// 81升分（`Square::all()` の順）
    pub squares: Vec<BoardSquare>,
    pub promote: Option<Promotion>,
    pub do_not_promote: Option<Promotion>,
}
