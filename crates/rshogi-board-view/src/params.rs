//! 盤面の寸法定数
//!
//! 値は倍率 1.0 のときのピクセル数。描画時には全て同じ倍率を掛ける。

use serde::{Deserialize, Serialize};

use crate::style::StylePatch;

/// 駒画像の寸法
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PieceParams {
    pub width: f64,
    pub height: f64,
}

impl Default for PieceParams {
    fn default() -> Self {
        PieceParams {
            width: 80.0,
            height: 88.0,
        }
    }
}

/// 段・筋ラベルの寸法
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelParams {
    pub font_size: f64,
}

impl Default for LabelParams {
    fn default() -> Self {
        LabelParams { font_size: 24.0 }
    }
}

/// 直前の指し手・選択中の升の強調表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightParams {
    pub last_move_to: StylePatch,
    pub last_move_from: StylePatch,
    pub selected: StylePatch,
}

impl Default for HighlightParams {
    fn default() -> Self {
        HighlightParams {
            last_move_to: StylePatch::new("#01bf09", 0.8),
            last_move_from: StylePatch::new("#01bf09", 0.4),
            selected: StylePatch::new("#ff4800", 0.5),
        }
    }
}

/// 利きの表示色
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThreatParams {
    /// 両者の利きが重なる升
    pub both: StylePatch,
    /// 先手の利きだけがある升
    pub black: StylePatch,
    /// 後手の利きだけがある升
    pub white: StylePatch,
}

impl Default for ThreatParams {
    fn default() -> Self {
        ThreatParams {
            both: StylePatch::new("#800080", 0.6),
            black: StylePatch::new("#0000ff", 0.4),
            white: StylePatch::new("#ff0000", 0.4),
        }
    }
}

/// 盤面全体の寸法
///
/// `width = 2 * left_square_padding + 9 * square_width`、
/// `height = 2 * top_square_padding + 9 * square_height` を満たす必要がある
/// （[`BoardParams::check_geometry`]）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardParams {
    pub width: f64,
    pub height: f64,
    pub square_width: f64,
    pub square_height: f64,
    pub left_square_padding: f64,
    pub top_square_padding: f64,
    pub left_piece_padding: f64,
    pub top_piece_padding: f64,
    pub piece: PieceParams,
    pub label: LabelParams,
    pub highlight: HighlightParams,
    pub threat: ThreatParams,
}

impl Default for BoardParams {
    fn default() -> Self {
        BoardParams {
            width: 880.0,
            height: 960.0,
            square_width: 88.0,
            square_height: 96.0,
            left_square_padding: 44.0,
            top_square_padding: 48.0,
            left_piece_padding: 48.0,
            top_piece_padding: 52.0,
            piece: PieceParams::default(),
            label: LabelParams::default(),
            highlight: HighlightParams::default(),
            threat: ThreatParams::default(),
        }
    }
}

const GEOMETRY_EPSILON: f64 = 1e-9;

impl BoardParams {
    /// 寸法の整合性を検査し、問題があれば内容を返す
    pub fn check_geometry(&self) -> Result<(), String> {
        let values = [
            ("width", self.width),
            ("height", self.height),
            ("square_width", self.square_width),
            ("square_height", self.square_height),
            ("piece.width", self.piece.width),
            ("piece.height", self.piece.height),
            ("label.font_size", self.label.font_size),
        ];
        for (name, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!("{name} must be positive: {value}"));
            }
        }
        let paddings = [
            ("left_square_padding", self.left_square_padding),
            ("top_square_padding", self.top_square_padding),
            ("left_piece_padding", self.left_piece_padding),
            ("top_piece_padding", self.top_piece_padding),
        ];
        for (name, value) in paddings {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must not be negative: {value}"));
            }
        }

        let expected_width = 2.0 * self.left_square_padding + 9.0 * self.square_width;
        if (self.width - expected_width).abs() > GEOMETRY_EPSILON {
            return Err(format!(
                "width {} does not match 2 * left_square_padding + 9 * square_width = {expected_width}",
                self.width
            ));
        }
        let expected_height = 2.0 * self.top_square_padding + 9.0 * self.square_height;
        if (self.height - expected_height).abs() > GEOMETRY_EPSILON {
            return Err(format!(
                "height {} does not match 2 * top_square_padding + 9 * square_height = {expected_height}",
                self.height
            ));
        }
        Ok(())
    }
}
