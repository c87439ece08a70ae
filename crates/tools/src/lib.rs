//! 盤面レイアウト用のコマンドラインツール

pub mod common;
