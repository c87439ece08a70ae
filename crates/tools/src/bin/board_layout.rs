use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use rshogi_board_core::{
    Color, Move, Position, parse_sfen_piece, parse_usi_move, parse_usi_square,
};
use rshogi_board_view::{
    BoardLabelType, BoardLayout, BoardLayoutBuilder, Config, LogObserver, Pointer,
    PromotionSelectorStyle,
};
use serde::Serialize;
use tools::common::config::load_config;
use tools::common::io::open_writer;

#[derive(Parser, Debug)]
#[command(author, version, about = "Compute a shogi board layout and print it as JSON")]
struct Cli {
    /// 表示設定ファイル（.json なら JSON、それ以外は TOML）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 局面（SFEN または startpos）
    #[arg(long, default_value = "startpos")]
    sfen: String,

    /// 盤面を反転して表示
    #[arg(long)]
    flip: bool,

    /// ラベルの表示方法（none / standard）
    #[arg(long)]
    label_type: Option<BoardLabelType>,

    /// 成り選択肢の並べ方（horizontal / vertical-prefer-bottom / horizontal-prefer-right）
    #[arg(long)]
    promotion_style: Option<PromotionSelectorStyle>,

    /// 局面の利きを表示
    #[arg(long)]
    threat: bool,

    /// 直前の指し手（USI形式、指した後の局面に対して解釈）
    #[arg(long)]
    last_move: Option<String>,

    /// 選択中の升（USI形式）
    #[arg(long, conflicts_with = "pointer_hand")]
    pointer: Option<String>,

    /// 選択中の駒台の駒（SFEN形式の駒文字）
    #[arg(long)]
    pointer_hand: Option<String>,

    /// 成り・不成の選択待ちの指し手（USI形式、指す前の局面に対して解釈）
    #[arg(long)]
    promotion: Option<String>,

    /// 表示倍率
    #[arg(long, default_value_t = 1.0)]
    ratio: f64,

    /// 出力先（"-" は標準出力）
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// 実際に使う設定を TOML で出力して終了
    #[arg(long)]
    print_config: bool,

    /// デバッグログを有効化
    #[arg(long)]
    debug: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    sfen: String,
    side_to_move: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_move: Option<String>,
    layout: &'a BoardLayout,
}

fn init_logger(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| {
        writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args())
    })
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();
}

/// 設定ファイルとコマンドライン指定から設定を作る
fn resolve_config(cli: &Cli, position: &Position) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if cli.flip {
        config.flip = true;
    }
    if let Some(label_type) = cli.label_type {
        config.board_label_type = label_type;
    }
    if let Some(style) = cli.promotion_style {
        config.promotion_selector_style = style;
    }
    if cli.threat && config.position.is_none() {
        config.position = Some(position.board.clone());
    }
    config.validate()?;
    Ok(config)
}

fn parse_pointer(cli: &Cli) -> Result<Option<Pointer>> {
    if let Some(square) = &cli.pointer {
        return Ok(Some(Pointer::Square(parse_usi_square(square)?)));
    }
    if let Some(piece) = &cli.pointer_hand {
        return Ok(Some(Pointer::Hand(parse_sfen_piece(piece)?)));
    }
    Ok(None)
}

fn parse_promotion(cli: &Cli, position: &Position) -> Result<Option<Move>> {
    let Some(usi) = &cli.promotion else {
        return Ok(None);
    };
    let mv = parse_usi_move(usi, &position.board, position.side_to_move)
        .with_context(|| format!("invalid --promotion {usi}"))?;
    if mv.is_drop() {
        bail!("--promotion must be a board move: {usi}");
    }
    if !mv.piece_type.can_promote() {
        log::warn!("{} cannot promote; both choices use the same image", mv.piece_type.name());
    }
    Ok(Some(mv))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let position = Position::from_sfen(&cli.sfen)
        .with_context(|| format!("invalid --sfen {}", cli.sfen))?;
    let config = resolve_config(&cli, &position)?;

    if cli.print_config {
        let text = toml::to_string_pretty(&config).context("failed to serialize config")?;
        let mut writer = open_writer(&cli.output)?;
        write!(writer, "{text}")?;
        writer.close()?;
        return Ok(());
    }

    let last_move = match &cli.last_move {
        Some(usi) => Some(
            parse_usi_move(usi, &position.board, position.side_to_move.opponent())
                .with_context(|| format!("invalid --last-move {usi}"))?,
        ),
        None => None,
    };
    let pointer = parse_pointer(&cli)?;
    let promotion = parse_promotion(&cli, &position)?;

    let observer = LogObserver;
    let builder = BoardLayoutBuilder::new(&config, cli.ratio)?.with_observer(&observer);
    let layout = builder.build(
        &position.board,
        last_move.as_ref(),
        pointer.as_ref(),
        promotion.as_ref(),
    );
    log::info!(
        "built layout: {} pieces, {} labels, promotion={}",
        layout.pieces.len(),
        layout.labels.len(),
        layout.promote.is_some()
    );

    let output = Output {
        sfen: position.to_sfen(),
        side_to_move: position.side_to_move,
        last_move: last_move.map(|mv| mv.to_usi()),
        layout: &layout,
    };
    let mut writer = open_writer(&cli.output)
        .with_context(|| format!("failed to open {}", cli.output.display()))?;
    serde_json::to_writer_pretty(&mut writer, &output)?;
    writeln!(writer)?;
    writer.close()?;
    Ok(())
}
