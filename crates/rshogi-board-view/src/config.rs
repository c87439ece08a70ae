//! 盤面表示の設定
//!
//! 設定はレイアウト計算からは読み取り専用。列挙値の文字列表現に未知の値が来た場合は
//! 既定値に落とさず [`ConfigError`] として扱う。

use std::fmt;
use std::str::FromStr;

use rshogi_board_core::{Board, Color, PieceType};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Serialize};

use crate::params::BoardParams;

/// 設定エラー
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unsupported promotion selector style: {0}")]
    UnsupportedPromotionSelectorStyle(String),

    #[error("Unsupported board label type: {0}")]
    UnsupportedBoardLabelType(String),

    #[error("Unsupported board image type: {0}")]
    UnsupportedBoardImageType(String),

    #[error("Board image opacity must be within 0..=1: {0}")]
    InvalidOpacity(f64),

    #[error("Display ratio must be a positive finite number: {0}")]
    InvalidRatio(f64),

    #[error("Inconsistent board geometry: {0}")]
    InconsistentGeometry(String),
}

/// 文字列表現の列挙値を serde の定義どおりに解析する
fn parse_variant<'de, T: Deserialize<'de>>(s: &'de str) -> Option<T> {
    let de: serde::de::value::StrDeserializer<'de, serde::de::value::Error> =
        s.into_deserializer();
    T::deserialize(de).ok()
}

/// 盤面画像の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoardImageType {
    #[default]
    Light,
    Light2,
    Light3,
    Warm,
    Warm2,
    Resin,
    Resin2,
    Resin3,
    Green,
    CherryBlossom,
    Autumn,
    Snow,
    DarkGreen,
    Dark,
    CustomImage,
}

impl BoardImageType {
    /// 盤面の背景色
    ///
    /// テクスチャ画像を使う種類は透明になる。
    pub const fn background_color(self) -> &'static str {
        match self {
            BoardImageType::Light
            | BoardImageType::Light2
            | BoardImageType::Light3
            | BoardImageType::Warm
            | BoardImageType::Warm2
            | BoardImageType::CustomImage => "rgba(0, 0, 0, 0)",
            BoardImageType::Resin => "#d69b00",
            BoardImageType::Resin2 => "#efbf63",
            BoardImageType::Resin3 => "#ad7624",
            BoardImageType::Green => "#598459",
            BoardImageType::CherryBlossom => "#ecb6b6",
            BoardImageType::Autumn => "#d09f51",
            BoardImageType::Snow => "#c3c0d3",
            BoardImageType::DarkGreen => "#465e5e",
            BoardImageType::Dark => "#333333",
        }
    }
}

impl FromStr for BoardImageType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s).ok_or_else(|| ConfigError::UnsupportedBoardImageType(s.to_string()))
    }
}

/// 段・筋ラベルの表示方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoardLabelType {
    /// 表示しない
    None,
    /// 盤外に漢数字（段）とアラビア数字（筋）
    #[default]
    Standard,
}

impl FromStr for BoardLabelType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s).ok_or_else(|| ConfigError::UnsupportedBoardLabelType(s.to_string()))
    }
}

/// 成り・不成の選択肢の並べ方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromotionSelectorStyle {
    /// 移動先の段に横並び（盤端では内側にずらす）
    #[default]
    Horizontal,
    /// 移動先の筋に縦並び、不成は下（最下段なら上）
    VerticalPreferBottom,
    /// 移動先の段に横並び、不成は右（右端なら左）
    HorizontalPreferRight,
}

impl PromotionSelectorStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            PromotionSelectorStyle::Horizontal => "horizontal",
            PromotionSelectorStyle::VerticalPreferBottom => "vertical-prefer-bottom",
            PromotionSelectorStyle::HorizontalPreferRight => "horizontal-prefer-right",
        }
    }
}

impl fmt::Display for PromotionSelectorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromotionSelectorStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant(s)
            .ok_or_else(|| ConfigError::UnsupportedPromotionSelectorStyle(s.to_string()))
    }
}

/// 駒画像の種類（駒種 + 玉将用の別画像）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceImageKey {
    Piece(PieceType),
    /// 先手の玉に使う画像
    King2,
}

impl PieceImageKey {
    /// 識別子用の名前（"pawn", "king2" 等）
    pub const fn name(self) -> &'static str {
        match self {
            PieceImageKey::Piece(pt) => pt.name(),
            PieceImageKey::King2 => "king2",
        }
    }
}

impl From<PieceType> for PieceImageKey {
    fn from(pt: PieceType) -> Self {
        PieceImageKey::Piece(pt)
    }
}

/// 片方の手番の駒画像パス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PieceImageSet {
    pub pawn: String,
    pub lance: String,
    pub knight: String,
    pub silver: String,
    pub gold: String,
    pub bishop: String,
    pub rook: String,
    pub king: String,
    pub king2: String,
    pub pro_pawn: String,
    pub pro_lance: String,
    pub pro_knight: String,
    pub pro_silver: String,
    pub horse: String,
    pub dragon: String,
}

impl PieceImageSet {
    /// `{dir}/{color}_{name}.png` 形式のパスで埋めたセット
    pub fn in_directory(dir: &str, color: Color) -> PieceImageSet {
        let path = |key: PieceImageKey| format!("{dir}/{}_{}.png", color.name(), key.name());
        PieceImageSet {
            pawn: path(PieceType::Pawn.into()),
            lance: path(PieceType::Lance.into()),
            knight: path(PieceType::Knight.into()),
            silver: path(PieceType::Silver.into()),
            gold: path(PieceType::Gold.into()),
            bishop: path(PieceType::Bishop.into()),
            rook: path(PieceType::Rook.into()),
            king: path(PieceType::King.into()),
            king2: path(PieceImageKey::King2),
            pro_pawn: path(PieceType::ProPawn.into()),
            pro_lance: path(PieceType::ProLance.into()),
            pro_knight: path(PieceType::ProKnight.into()),
            pro_silver: path(PieceType::ProSilver.into()),
            horse: path(PieceType::Horse.into()),
            dragon: path(PieceType::Dragon.into()),
        }
    }

    /// 画像パスを引く
    pub fn get(&self, key: PieceImageKey) -> &str {
        match key {
            PieceImageKey::Piece(PieceType::Pawn) => &self.pawn,
            PieceImageKey::Piece(PieceType::Lance) => &self.lance,
            PieceImageKey::Piece(PieceType::Knight) => &self.knight,
            PieceImageKey::Piece(PieceType::Silver) => &self.silver,
            PieceImageKey::Piece(PieceType::Gold) => &self.gold,
            PieceImageKey::Piece(PieceType::Bishop) => &self.bishop,
            PieceImageKey::Piece(PieceType::Rook) => &self.rook,
            PieceImageKey::Piece(PieceType::King) => &self.king,
            PieceImageKey::King2 => &self.king2,
            PieceImageKey::Piece(PieceType::ProPawn) => &self.pro_pawn,
            PieceImageKey::Piece(PieceType::ProLance) => &self.pro_lance,
            PieceImageKey::Piece(PieceType::ProKnight) => &self.pro_knight,
            PieceImageKey::Piece(PieceType::ProSilver) => &self.pro_silver,
            PieceImageKey::Piece(PieceType::Horse) => &self.horse,
            PieceImageKey::Piece(PieceType::Dragon) => &self.dragon,
        }
    }
}

/// 手番ごとの駒画像パス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PieceImages {
    pub black: PieceImageSet,
    pub white: PieceImageSet,
}

impl PieceImages {
    /// 既定の画像ディレクトリ
    pub const DEFAULT_DIR: &'static str = "./piece/hitomoji";

    /// 同じディレクトリの画像で埋めた表
    pub fn in_directory(dir: &str) -> PieceImages {
        PieceImages {
            black: PieceImageSet::in_directory(dir, Color::Black),
            white: PieceImageSet::in_directory(dir, Color::White),
        }
    }

    /// 表示上の手番と画像の種類からパスを引く
    pub fn get(&self, color: Color, key: PieceImageKey) -> &str {
        match color {
            Color::Black => self.black.get(key),
            Color::White => self.white.get(key),
        }
    }
}

impl Default for PieceImages {
    fn default() -> Self {
        PieceImages::in_directory(PieceImages::DEFAULT_DIR)
    }
}

/// 盤面表示の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// 盤面を反転（後手を手前）して表示する
    pub flip: bool,
    pub piece_images: PieceImages,
    pub board_image_type: BoardImageType,
    pub board_image_opacity: f64,
    pub board_grid_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_texture_image: Option<String>,
    pub board_label_type: BoardLabelType,
    pub promotion_selector_style: PromotionSelectorStyle,
    /// 寸法定数
    pub params: BoardParams,
    /// 利きの表示に使う現局面（None なら利きを表示しない）
    ///
    /// `build` に渡す盤面とは独立している。
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Board>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            flip: false,
            piece_images: PieceImages::default(),
            board_image_type: BoardImageType::default(),
            board_image_opacity: 1.0,
            board_grid_color: "#000000".to_string(),
            board_texture_image: None,
            board_label_type: BoardLabelType::default(),
            promotion_selector_style: PromotionSelectorStyle::default(),
            params: BoardParams::default(),
            position: None,
        }
    }
}

impl Config {
    /// 設定値を検査する
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.board_image_opacity) {
            return Err(ConfigError::InvalidOpacity(self.board_image_opacity));
        }
        self.params.check_geometry().map_err(ConfigError::InconsistentGeometry)
    }
}
