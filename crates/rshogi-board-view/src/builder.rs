//! 盤面レイアウトの組み立て
//!
//! [`BoardLayoutBuilder`] は設定と表示倍率だけを保持し、[`BoardLayoutBuilder::build`] の
//! たびに背景・ラベル・駒・升目・成り選択肢を独立に計算する。呼び出し間で状態は持たない。
//!
//! 座標系:
//! - 表示上の列 x は左端（9筋）が 0、行 y は上端（1段）が 0
//! - 反転表示では升を `Square::opposite` に置き換えてから座標を求める

use rshogi_board_core::{Bitboard, Board, Color, File, Move, Piece, PieceType, Rank, Square};

use crate::attack::compute_attack_squares;
use crate::config::{BoardLabelType, Config, ConfigError, PieceImageKey, PromotionSelectorStyle};
use crate::layout::{
    BoardBackground, BoardLabel, BoardLayout, BoardPiece, BoardSquare, CellStyle, LabelStyle,
    Point, Promotion, Rect,
};
use crate::observer::{LayoutObserver, OverlayLayer, TraceEvent};
use crate::params::BoardParams;
use crate::style::{StylePatch, compose};

/// 利用者が指している対象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    /// 盤上の升
    Square(Square),
    /// 駒台の駒
    Hand(Piece),
}

/// 座標を求める対象
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelKind {
    /// 升目の左上
    Cell,
    /// 駒画像の左上
    Sprite,
}

/// 両者の利き
struct AttackMap {
    black: Bitboard,
    white: Bitboard,
}

/// 盤面レイアウトの組み立て
pub struct BoardLayoutBuilder<'a> {
    config: &'a Config,
    ratio: f64,
    observer: Option<&'a dyn LayoutObserver>,
}

impl<'a> BoardLayoutBuilder<'a> {
    /// 設定を検査してビルダーを生成する
    pub fn new(config: &'a Config, ratio: f64) -> Result<BoardLayoutBuilder<'a>, ConfigError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(ConfigError::InvalidRatio(ratio));
        }
        config.validate()?;
        Ok(BoardLayoutBuilder {
            config,
            ratio,
            observer: None,
        })
    }

    /// 観測フックを設定する
    pub fn with_observer(mut self, observer: &'a dyn LayoutObserver) -> BoardLayoutBuilder<'a> {
        self.observer = Some(observer);
        self
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    #[inline]
    fn params(&self) -> &BoardParams {
        &self.config.params
    }

    fn emit(&self, event: TraceEvent) {
        if let Some(observer) = self.observer {
            observer.on_event(&event);
        }
    }

    /// 表示上の升（反転表示なら180度回転した升）
    #[inline]
    fn display_square(&self, square: Square) -> Square {
        if self.config.flip { square.opposite() } else { square }
    }

    /// 表示上の手番
    #[inline]
    fn display_color(&self, color: Color) -> Color {
        if self.config.flip { color.opponent() } else { color }
    }

    /// 表示上の列・行からピクセル座標へ
    fn grid_to_pixel(&self, x: f64, y: f64, kind: PixelKind) -> Point {
        let p = self.params();
        let (left, top) = match kind {
            PixelKind::Cell => (p.left_square_padding, p.top_square_padding),
            PixelKind::Sprite => (p.left_piece_padding, p.top_piece_padding),
        };
        Point::new(
            (left + p.square_width * x) * self.ratio,
            (top + p.square_height * y) * self.ratio,
        )
    }

    /// 升の左上のピクセル座標
    pub fn to_pixel(&self, square: Square, kind: PixelKind) -> Point {
        let sq = self.display_square(square);
        self.grid_to_pixel(f64::from(sq.x()), f64::from(sq.y()), kind)
    }

    /// 升の中心のピクセル座標
    pub fn center_of_square(&self, square: Square) -> Point {
        let sq = self.display_square(square);
        self.grid_to_pixel(f64::from(sq.x()) + 0.5, f64::from(sq.y()) + 0.5, PixelKind::Cell)
    }

    /// 盤面全体の矩形
    pub fn board_rect(&self) -> Rect {
        let p = self.params();
        Rect::new(Point::default(), p.width * self.ratio, p.height * self.ratio)
    }

    /// 1升分の寸法
    fn square_size(&self) -> (f64, f64) {
        let p = self.params();
        (p.square_width * self.ratio, p.square_height * self.ratio)
    }

    /// レイアウトを組み立てる
    ///
    /// - `board`: 駒を配置する盤面
    /// - `last_move`: 直前の指し手（強調表示）
    /// - `pointer`: 選択中の升または駒台の駒
    /// - `pending_promotion`: 成り・不成の選択待ちの指し手
    ///
    /// 利きの表示は `board` ではなく設定の `position` から計算する。
    pub fn build(
        &self,
        board: &Board,
        last_move: Option<&Move>,
        pointer: Option<&Pointer>,
        pending_promotion: Option<&Move>,
    ) -> BoardLayout {
        let (promote, do_not_promote) = match self.promotion_controls(pending_promotion) {
            Some((promote, do_not_promote)) => (Some(promote), Some(do_not_promote)),
            None => (None, None),
        };
        BoardLayout {
            background: self.background(),
            labels: self.labels(),
            pieces: self.pieces(board),
            squares: self.squares(last_move, pointer),
            promote,
            do_not_promote,
        }
    }

    fn background(&self) -> BoardBackground {
        BoardBackground {
            grid_color: self.config.board_grid_color.clone(),
            texture_image_path: self.config.board_texture_image.clone(),
            background_color: self.config.board_image_type.background_color().to_string(),
            opacity: self.config.board_image_opacity,
            rect: self.board_rect(),
        }
    }

    /// 段・筋ラベル
    ///
    /// 段は右端（反転時は左端）から駒の余白の半分、筋は上端（反転時は下端）から
    /// 升の余白の 0.7 倍の位置に置く。
    fn labels(&self) -> Vec<BoardLabel> {
        if self.config.board_label_type == BoardLabelType::None {
            return Vec::new();
        }
        let p = self.params();
        let r = self.ratio;
        let flip = self.config.flip;
        let font_size = p.label.font_size * r;
        let style = |left: f64, top: f64| LabelStyle {
            left,
            top,
            font_size,
            color: "black".to_string(),
            bold: true,
            shadow: font_size * 0.1,
        };

        let mut labels = Vec::with_capacity(18);
        let (rank_edge, rank_sign) = if flip { (0.0, 1.0) } else { (p.width, -1.0) };
        let rank_x = p.left_piece_padding * 0.5 * r * rank_sign - font_size * 0.5 + rank_edge * r;
        for rank in Rank::ALL {
            let n = f64::from(rank.number());
            let row = if flip { 10.0 - n } else { n };
            let y = (p.top_square_padding + (row - 0.5) * p.square_height) * r - font_size * 0.5;
            labels.push(BoardLabel {
                id: format!("rank{}", rank.number()),
                character: rank.kanji().to_string(),
                style: style(rank_x, y),
            });
        }

        let (file_edge, file_sign) = if flip { (p.height, -1.0) } else { (0.0, 1.0) };
        let file_y = file_edge * r + p.top_square_padding * 0.7 * r * file_sign - font_size * 0.6;
        for file in File::ALL {
            let n = f64::from(file.number());
            let col = if flip { 10.0 - n } else { n };
            let x = (p.left_piece_padding + (9.5 - col) * p.square_width) * r - font_size * 0.5;
            labels.push(BoardLabel {
                id: format!("file{}", file.number()),
                character: file.number().to_string(),
                style: style(x, file_y),
            });
        }
        labels
    }

    /// 駒画像の種類（先手の玉は別画像）
    fn image_key(piece: Piece) -> PieceImageKey {
        match (piece.color(), piece.piece_type()) {
            (Color::Black, PieceType::King) => PieceImageKey::King2,
            (_, piece_type) => PieceImageKey::Piece(piece_type),
        }
    }

    fn pieces(&self, board: &Board) -> Vec<BoardPiece> {
        let p = self.params();
        let (width, height) = (p.piece.width * self.ratio, p.piece.height * self.ratio);
        board
            .non_empty_squares()
            .filter_map(|square| board.at(square).map(|piece| (square, piece)))
            .map(|(square, piece)| {
                let color = self.display_color(piece.color());
                BoardPiece {
                    id: format!("{}{}", piece.id(), square.index()),
                    image_path: self
                        .config
                        .piece_images
                        .get(color, Self::image_key(piece))
                        .to_string(),
                    rect: Rect::new(self.to_pixel(square, PixelKind::Sprite), width, height),
                }
            })
            .collect()
    }

    /// 設定の局面から両者の利きを計算する
    fn attack_map(&self) -> Option<AttackMap> {
        let position = self.config.position.as_ref()?;
        let black = compute_attack_squares(position, Color::Black);
        self.emit(TraceEvent::AttackSquares {
            color: Color::Black,
            squares: black,
        });
        let white = compute_attack_squares(position, Color::White);
        self.emit(TraceEvent::AttackSquares {
            color: Color::White,
            squares: white,
        });
        Some(AttackMap { black, white })
    }

    /// 升に重ねる層を優先順位の低い順に返す
    fn overlay_layers(
        square: Square,
        attacks: Option<&AttackMap>,
        last_move: Option<&Move>,
        pointer: Option<&Pointer>,
    ) -> Vec<OverlayLayer> {
        let mut layers = Vec::new();
        if let Some(attacks) = attacks {
            match (attacks.black.contains(square), attacks.white.contains(square)) {
                (true, true) => layers.push(OverlayLayer::ThreatBoth),
                (true, false) => layers.push(OverlayLayer::ThreatBlack),
                (false, true) => layers.push(OverlayLayer::ThreatWhite),
                (false, false) => {}
            }
        }
        if let Some(mv) = last_move {
            if mv.to == square {
                layers.push(OverlayLayer::LastMoveTo);
            }
            if mv.from == Some(square) {
                layers.push(OverlayLayer::LastMoveFrom);
            }
        }
        if matches!(pointer, Some(Pointer::Square(selected)) if *selected == square) {
            layers.push(OverlayLayer::Selected);
        }
        layers
    }

    fn layer_patch(&self, layer: OverlayLayer) -> &StylePatch {
        let p = self.params();
        match layer {
            OverlayLayer::ThreatBoth => &p.threat.both,
            OverlayLayer::ThreatBlack => &p.threat.black,
            OverlayLayer::ThreatWhite => &p.threat.white,
            OverlayLayer::LastMoveTo => &p.highlight.last_move_to,
            OverlayLayer::LastMoveFrom => &p.highlight.last_move_from,
            OverlayLayer::Selected => &p.highlight.selected,
        }
    }

    fn squares(&self, last_move: Option<&Move>, pointer: Option<&Pointer>) -> Vec<BoardSquare> {
        let attacks = self.attack_map();
        let (width, height) = self.square_size();
        Square::all()
            .map(|square| {
                let rect = Rect::new(self.to_pixel(square, PixelKind::Cell), width, height);
                let layers = Self::overlay_layers(square, attacks.as_ref(), last_move, pointer);
                for &layer in &layers {
                    self.emit(TraceEvent::SquareOverlay { square, layer });
                }
                let patch = compose(layers.iter().map(|&layer| self.layer_patch(layer)));
                BoardSquare {
                    id: square.index(),
                    file: square.file().number(),
                    rank: square.rank().number(),
                    rect,
                    background: CellStyle {
                        rect,
                        background_color: patch.background_color,
                        opacity: patch.opacity,
                    },
                }
            })
            .collect()
    }

    /// 成り・不成の選択肢
    fn promotion_controls(&self, mv: Option<&Move>) -> Option<(Promotion, Promotion)> {
        let mv = mv?;
        let color = self.display_color(mv.color);
        let square = self.display_square(mv.to);
        let piece = Piece::new(color, mv.piece_type);
        let images = &self.config.piece_images;
        let promote_image = images.get(color, piece.promoted().piece_type().into());
        let do_not_promote_image = images.get(color, piece.unpromoted().piece_type().into());

        let (width, height) = self.square_size();
        let x = f64::from(square.x());
        let y = f64::from(square.y());
        let (first, second) = match self.config.promotion_selector_style {
            PromotionSelectorStyle::Horizontal => {
                let anchor = match square.x() {
                    0 => 0.0,
                    8 => 7.0,
                    _ => x - 0.5,
                };
                let first = self.grid_to_pixel(anchor, y, PixelKind::Cell);
                (first, Point::new(first.x + width, first.y))
            }
            PromotionSelectorStyle::VerticalPreferBottom => {
                let first = self.grid_to_pixel(x, y, PixelKind::Cell);
                let dy = if square.y() == 8 { -height } else { height };
                (first, Point::new(first.x, first.y + dy))
            }
            PromotionSelectorStyle::HorizontalPreferRight => {
                let first = self.grid_to_pixel(x, y, PixelKind::Cell);
                let dx = if square.x() == 8 { -width } else { width };
                (first, Point::new(first.x + dx, first.y))
            }
        };
        Some((
            Promotion {
                image_path: promote_image.to_string(),
                rect: Rect::new(first, width, height),
            },
            Promotion {
                image_path: do_not_promote_image.to_string(),
                rect: Rect::new(second, width, height),
            },
        ))
    }
}
