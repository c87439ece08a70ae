//! 将棋盤のレイアウト計算
//!
//! 盤面・直前の指し手・選択状態・表示設定から、升目・駒・ラベル・強調表示・
//! 成り選択肢の位置とスタイルを値として求める。描画そのものは行わない。
//!
//! ```
//! use rshogi_board_core::Board;
//! use rshogi_board_view::{BoardLayoutBuilder, Config};
//!
//! let config = Config::default();
//! let builder = BoardLayoutBuilder::new(&config, 1.0).unwrap();
//! let layout = builder.build(&Board::hirate(), None, None, None);
//! assert_eq!(layout.squares.len(), 81);
//! assert_eq!(layout.pieces.len(), 40);
//! ```

pub mod attack;
pub mod builder;
pub mod config;
pub mod layout;
pub mod observer;
pub mod params;
pub mod style;

pub use attack::compute_attack_squares;
pub use builder::{BoardLayoutBuilder, PixelKind, Pointer};
pub use config::{
    BoardImageType, BoardLabelType, Config, ConfigError, PieceImageKey, PieceImageSet,
    PieceImages, PromotionSelectorStyle,
};
pub use layout::{
    BoardBackground, BoardLabel, BoardLayout, BoardPiece, BoardSquare, CellStyle, LabelStyle,
    Point, Promotion, Rect,
};
pub use observer::{LayoutObserver, LogObserver, OverlayLayer, TraceEvent};
pub use params::{BoardParams, HighlightParams, LabelParams, PieceParams, ThreatParams};
pub use style::StylePatch;
