//! レイアウト計算の観測フック
//!
//! ビルダーに [`LayoutObserver`] を渡すと、利きの計算結果と升目ごとの重ね合わせが
//! イベントとして通知される。渡さなければ何も出力しない。

use rshogi_board_core::{Bitboard, Color, Square};

/// 升目に重ねたスタイルの層
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayLayer {
    /// 両者の利き
    ThreatBoth,
    /// 先手だけの利き
    ThreatBlack,
    /// 後手だけの利き
    ThreatWhite,
    LastMoveTo,
    LastMoveFrom,
    Selected,
}

impl OverlayLayer {
    pub const fn name(self) -> &'static str {
        match self {
            OverlayLayer::ThreatBoth => "threat-both",
            OverlayLayer::ThreatBlack => "threat-black",
            OverlayLayer::ThreatWhite => "threat-white",
            OverlayLayer::LastMoveTo => "last-move-to",
            OverlayLayer::LastMoveFrom => "last-move-from",
            OverlayLayer::Selected => "selected",
        }
    }
}

/// 観測イベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// 片方の手番の利きを計算した
    AttackSquares { color: Color, squares: Bitboard },
    /// 升目に層を重ねた
    SquareOverlay { square: Square, layer: OverlayLayer },
}

/// 観測フック
pub trait LayoutObserver {
    fn on_event(&self, event: &TraceEvent);
}

/// イベントを `log` に流す観測フック
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl LayoutObserver for LogObserver {
    fn on_event(&self, event: &TraceEvent) {
        match event {
            TraceEvent::AttackSquares { color, squares } => {
                let list: Vec<String> = squares.iter().map(|sq| sq.to_usi()).collect();
                log::debug!(
                    "attack squares for {}: {} squares [{}]",
                    color.name(),
                    squares.count(),
                    list.join(" ")
                );
            }
            TraceEvent::SquareOverlay { square, layer } => {
                log::trace!("square {square} ({}): {}", square.index(), layer.name());
            }
        }
    }
}

impl<F: Fn(&TraceEvent)> LayoutObserver for F {
    fn on_event(&self, event: &TraceEvent) {
        self(event)
    }
}
