//! 共通ユーティリティ

pub mod config;
pub mod io;
