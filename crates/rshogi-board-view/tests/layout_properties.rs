use std::cell::RefCell;

use proptest::prelude::*;
use rshogi_board_core::{Board, Color, File, Move, Piece, PieceType, Rank, Square};
use rshogi_board_view::{
    BoardLabelType, BoardLayoutBuilder, Config, OverlayLayer, Pointer, PromotionSelectorStyle,
    TraceEvent,
};

const STYLES: [PromotionSelectorStyle; 3] = [
    PromotionSelectorStyle::Horizontal,
    PromotionSelectorStyle::VerticalPreferBottom,
    PromotionSelectorStyle::HorizontalPreferRight,
];

fn sq(file: File, rank: Rank) -> Square {
    Square::new(file, rank)
}

/// 5一 に後手の飛車、5九 に先手の飛車。5筋の間の升は両者の利きが重なる
fn facing_rooks() -> Board {
    let mut board = Board::empty();
    board.put_piece(sq(File::File5, Rank::Rank1), Piece::W_ROOK);
    board.put_piece(sq(File::File5, Rank::Rank9), Piece::B_ROOK);
    board
}

fn arb_board() -> impl Strategy<Value = Board> {
    let piece = (
        prop::sample::select(Color::ALL.to_vec()),
        prop::sample::select(PieceType::ALL.to_vec()),
    )
        .prop_map(|(color, piece_type)| Piece::new(color, piece_type));
    prop::collection::vec(prop::option::weighted(0.3, piece), 81).prop_map(|cells| {
        let mut board = Board::empty();
        for (sq, piece) in Square::all().zip(cells) {
            if let Some(piece) = piece {
                board.put_piece(sq, piece);
            }
        }
        board
    })
}

#[test]
fn empty_board_end_to_end() {
    let config = Config::default();
    let builder = BoardLayoutBuilder::new(&config, 1.0).unwrap();
    let layout = builder.build(&Board::empty(), None, None, None);

    assert!(layout.pieces.is_empty());
    assert_eq!(layout.squares.len(), 81);
    for (square, descriptor) in Square::all().zip(&layout.squares) {
        assert_eq!(descriptor.id, square.index());
        assert_eq!(descriptor.file, square.file().number());
        assert_eq!(descriptor.rank, square.rank().number());
        assert!(descriptor.background.is_plain());
        assert_eq!(descriptor.background.rect, descriptor.rect);
    }
    assert_eq!(layout.labels.len(), 18);
    assert!(layout.promote.is_none());
    assert!(layout.do_not_promote.is_none());
    assert_eq!(layout.background.rect.width, 880.0);
    assert_eq!(layout.background.rect.height, 960.0);
    assert_eq!(layout.background.background_color, "rgba(0, 0, 0, 0)");

    let config = Config {
        board_label_type: BoardLabelType::None,
        ..Config::default()
    };
    let builder = BoardLayoutBuilder::new(&config, 1.0).unwrap();
    assert!(builder.build(&Board::empty(), None, None, None).labels.is_empty());
}

#[test]
fn one_piece_descriptor_per_occupied_square() {
    let config = Config::default();
    let builder = BoardLayoutBuilder::new(&config, 1.0).unwrap();
    let layout = builder.build(&Board::hirate(), None, None, None);
    assert_eq!(layout.pieces.len(), 40);
    assert_eq!(layout.squares.len(), 81);
    let mut ids: Vec<&str> = layout.pieces.iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 40);
}

#[test]
fn threat_overlay_colors() {
    let config = Config {
        position: Some(facing_rooks()),
        ..Config::default()
    };
    let builder = BoardLayoutBuilder::new(&config, 1.0).unwrap();
    let layout = builder.build(&Board::empty(), None, None, None);
    let style = |square: Square| &layout.squares[square.index()].background;

    // 両者の利き
    let both = style(Square::SQ_55);
    assert_eq!(both.background_color.as_deref(), Some("#800080"));
    assert_eq!(both.opacity, Some(0.6));
    // 先手の飛車の横
    let black = style(sq(File::File4, Rank::Rank9));
    assert_eq!(black.background_color.as_deref(), Some("#0000ff"));
    assert_eq!(black.opacity, Some(0.4));
    // 後手の飛車の横
    let white = style(sq(File::File6, Rank::Rank1));
    assert_eq!(white.background_color.as_deref(), Some("#ff0000"));
    assert_eq!(white.opacity, Some(0.4));
    // どちらも利いていない
    assert!(style(sq(File::File1, Rank::Rank5)).is_plain());
}

#[test]
fn threat_overlay_follows_configured_position() {
    // 駒の配置と利きの計算元は独立
    let config = Config {
        position: Some(facing_rooks()),
        ..Config::default()
    };
    let builder = BoardLayoutBuilder::new(&config, 1.0).unwrap();
    let layout = builder.build(&Board::hirate(), None, None, None);
    assert_eq!(layout.pieces.len(), 40);
    assert_eq!(
        layout.squares[Square::SQ_55.index()].background.background_color.as_deref(),
        Some("#800080")
    );
}

#[test]
fn selection_wins_over_last_move_and_threat() {
    let config = Config {
        position: Some(facing_rooks()),
        ..Config::default()
    };
    let builder = BoardLayoutBuilder::new(&config, 1.0).unwrap();
    let from = sq(File::File5, Rank::Rank6);
    let mv = Move::normal(Color::Black, PieceType::Pawn, from, Square::SQ_55, false);
    let pointer = Pointer::Square(Square::SQ_55);
    let layout = builder.build(&Board::empty(), Some(&mv), Some(&pointer), None);

    let to = &layout.squares[Square::SQ_55.index()].background;
    assert_eq!(to.background_color.as_deref(), Some("#ff4800"));
    assert_eq!(to.opacity, Some(0.5));
    let origin = &layout.squares[from.index()].background;
    assert_eq!(origin.background_color.as_deref(), Some("#01bf09"));
    assert_eq!(origin.opacity, Some(0.4));

    // 選択がなければ直前の指し手の移動先が勝つ
    let layout = builder.build(&Board::empty(), Some(&mv), None, None);
    let to = &layout.squares[Square::SQ_55.index()].background;
    assert_eq!(to.background_color.as_deref(), Some("#01bf09"));
    assert_eq!(to.opacity, Some(0.8));
}

#[test]
fn build_is_idempotent() {
    let config = Config {
        flip: true,
        position: Some(Board::hirate()),
        ..Config::default()
    };
    let builder = BoardLayoutBuilder::new(&config, 0.75).unwrap();
    let board = Board::hirate();
    let mv = Move::normal(
        Color::Black,
        PieceType::Pawn,
        sq(File::File7, Rank::Rank7),
        sq(File::File7, Rank::Rank6),
        false,
    );
    let pointer = Pointer::Hand(Piece::W_GOLD);
    let first = builder.build(&board, Some(&mv), Some(&pointer), Some(&mv));
    let second = builder.build(&board, Some(&mv), Some(&pointer), Some(&mv));
    assert_eq!(first, second);
}

#[test]
fn promotion_choices_stay_on_board() {
    for style in STYLES {
        for flip in [false, true] {
            let config = Config {
                flip,
                promotion_selector_style: style,
                ..Config::default()
            };
            let builder = BoardLayoutBuilder::new(&config, 1.5).unwrap();
            let board_rect = builder.board_rect();
            for to in Square::all() {
                let mv = Move::drop(Color::Black, PieceType::Silver, to);
                let layout = builder.build(&Board::empty(), None, None, Some(&mv));
                let promote = layout.promote.unwrap();
                let do_not_promote = layout.do_not_promote.unwrap();
                assert!(promote.rect.is_within(&board_rect), "{style} {flip} {to}");
                assert!(do_not_promote.rect.is_within(&board_rect), "{style} {flip} {to}");
                assert_ne!(promote.rect, do_not_promote.rect);
            }
        }
    }
}

#[test]
fn horizontal_promotion_clamps_at_edges() {
    let config = Config::default();
    let builder = BoardLayoutBuilder::new(&config, 1.0).unwrap();
    // 9筋（左端）: 9筋と8筋の位置
    let mv = Move::drop(Color::Black, PieceType::Pawn, sq(File::File9, Rank::Rank1));
    let layout = builder.build(&Board::empty(), None, None, Some(&mv));
    assert_eq!(layout.promote.as_ref().unwrap().rect.left, 44.0);
    assert_eq!(layout.do_not_promote.as_ref().unwrap().rect.left, 132.0);
    // 1筋（右端）: 2筋と1筋の位置
    let mv = Move::drop(Color::Black, PieceType::Pawn, sq(File::File1, Rank::Rank1));
    let layout = builder.build(&Board::empty(), None, None, Some(&mv));
    assert_eq!(layout.promote.as_ref().unwrap().rect.left, 660.0);
    assert_eq!(layout.do_not_promote.as_ref().unwrap().rect.left, 748.0);
}

#[test]
fn vertical_promotion_flips_up_on_last_rank() {
    let config = Config {
        promotion_selector_style: PromotionSelectorStyle::VerticalPreferBottom,
        ..Config::default()
    };
    let builder = BoardLayoutBuilder::new(&config, 1.0).unwrap();
    let mv = Move::drop(Color::White, PieceType::Knight, sq(File::File3, Rank::Rank9));
    let layout = builder.build(&Board::empty(), None, None, Some(&mv));
    let promote = layout.promote.unwrap();
    let do_not_promote = layout.do_not_promote.unwrap();
    assert_eq!(promote.image_path, "./piece/hitomoji/white_pro_knight.png");
    assert_eq!(do_not_promote.image_path, "./piece/hitomoji/white_knight.png");
    assert_eq!(promote.rect.top, 816.0);
    assert_eq!(do_not_promote.rect.top, 720.0);
    assert_eq!(promote.rect.left, do_not_promote.rect.left);

    let mv = Move::drop(Color::White, PieceType::Knight, sq(File::File3, Rank::Rank7));
    let layout = builder.build(&Board::empty(), None, None, Some(&mv));
    assert_eq!(layout.do_not_promote.unwrap().rect.top, 720.0);
}

#[test]
fn prefer_right_promotion_flips_left_on_last_file() {
    let config = Config {
        promotion_selector_style: PromotionSelectorStyle::HorizontalPreferRight,
        ..Config::default()
    };
    let builder = BoardLayoutBuilder::new(&config, 1.0).unwrap();
    let mv = Move::drop(Color::Black, PieceType::Rook, sq(File::File1, Rank::Rank3));
    let layout = builder.build(&Board::empty(), None, None, Some(&mv));
    assert_eq!(layout.promote.as_ref().unwrap().rect.left, 748.0);
    assert_eq!(layout.do_not_promote.as_ref().unwrap().rect.left, 660.0);
}

#[test]
fn observer_receives_attack_and_overlay_events() {
    let events = RefCell::new(Vec::new());
    let record = |event: &TraceEvent| events.borrow_mut().push(event.clone());
    let config = Config {
        position: Some(facing_rooks()),
        ..Config::default()
    };
    let builder = BoardLayoutBuilder::new(&config, 1.0).unwrap().with_observer(&record);
    let pointer = Pointer::Square(Square::SQ_11);
    builder.build(&Board::empty(), None, Some(&pointer), None);

    let events = events.into_inner();
    let attack_colors: Vec<Color> = events
        .iter()
        .filter_map(|event| match event {
            TraceEvent::AttackSquares { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(attack_colors, vec![Color::Black, Color::White]);
    assert!(events.contains(&TraceEvent::SquareOverlay {
        square: Square::SQ_11,
        layer: OverlayLayer::Selected,
    }));
    assert!(events.contains(&TraceEvent::SquareOverlay {
        square: Square::SQ_55,
        layer: OverlayLayer::ThreatBoth,
    }));
}

#[test]
fn no_attack_events_without_position() {
    let events = RefCell::new(Vec::new());
    let record = |event: &TraceEvent| events.borrow_mut().push(event.clone());
    let config = Config::default();
    let builder = BoardLayoutBuilder::new(&config, 1.0).unwrap().with_observer(&record);
    builder.build(&Board::hirate(), None, None, None);
    assert!(events.into_inner().is_empty());
}

/// ラベルの (left, top) を id で引く
fn label_position(config: &Config, ratio: f64, id: &str) -> (f64, f64) {
    let builder = BoardLayoutBuilder::new(config, ratio).unwrap();
    let layout = builder.build(&Board::empty(), None, None, None);
    let label = layout.labels.iter().find(|l| l.id == id).unwrap();
    (label.style.left, label.style.top)
}

fn assert_position(actual: (f64, f64), expected: (f64, f64), id: &str) {
    assert!(
        (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
        "{id}: {actual:?} != {expected:?}"
    );
}

#[test]
fn labels_normal_orientation() {
    let config = Config::default();
    for (id, expected) in [
        ("rank1", (844.0, 84.0)),
        ("rank9", (844.0, 852.0)),
        ("file1", (784.0, 19.2)),
        ("file9", (80.0, 19.2)),
    ] {
        assert_position(label_position(&config, 1.0, id), expected, id);
    }
    // 倍率は座標と文字の大きさの両方に掛かる
    for (id, expected) in [("rank1", (1688.0, 168.0)), ("file1", (1568.0, 38.4))] {
        assert_position(label_position(&config, 2.0, id), expected, id);
    }
}

#[test]
fn labels_flipped_orientation() {
    let config = Config {
        flip: true,
        ..Config::default()
    };
    for (id, expected) in [
        ("rank1", (12.0, 852.0)),
        ("rank9", (12.0, 84.0)),
        ("file1", (80.0, 912.0)),
        ("file9", (784.0, 912.0)),
    ] {
        assert_position(label_position(&config, 1.0, id), expected, id);
    }
    for (id, expected) in [("rank1", (24.0, 1704.0)), ("file1", (160.0, 1824.0))] {
        assert_position(label_position(&config, 2.0, id), expected, id);
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 32, .. ProptestConfig::default() })]

    #[test]
    fn prop_flip_matches_rotated_position(board in arb_board(), ratio in 0.25f64..2.0) {
        let normal_config = Config::default();
        let flipped_config = Config { flip: true, ..Config::default() };
        let normal = BoardLayoutBuilder::new(&normal_config, ratio).unwrap();
        let flipped = BoardLayoutBuilder::new(&flipped_config, ratio).unwrap();

        let rotated = board.rotated();
        let a = flipped.build(&board, None, None, None);
        let b = normal.build(&rotated, None, None, None);

        // 升目: 反転表示の升 s は回転した局面の升 opposite(s) と同じ位置
        for square in Square::all() {
            prop_assert_eq!(
                a.squares[square.index()].rect,
                b.squares[square.opposite().index()].rect
            );
        }

        // 駒: 升のインデックス順なので回転すると逆順になる
        prop_assert_eq!(a.pieces.len(), b.pieces.len());
        for (pa, pb) in a.pieces.iter().zip(b.pieces.iter().rev()) {
            prop_assert_eq!(pa.rect, pb.rect);
            if !pa.image_path.contains("king") {
                prop_assert_eq!(&pa.image_path, &pb.image_path);
            }
        }
    }
}
