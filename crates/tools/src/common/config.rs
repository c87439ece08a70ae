//! 盤面表示設定の読み込み
//!
//! 拡張子が `.json` なら JSON、それ以外は TOML として読む。読み込んだ設定は
//! [`Config::validate`] で検査してから返す。

use std::path::Path;

use anyhow::{Context, Result};
use rshogi_board_view::Config;

use super::io::read_text;

/// 設定ファイルの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// パスの拡張子から形式を決める
    pub fn from_path(path: &Path) -> ConfigFormat {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        if ext == "json" { ConfigFormat::Json } else { ConfigFormat::Toml }
    }
}

/// 文字列から設定を読む
pub fn parse_config(text: &str, format: ConfigFormat) -> Result<Config> {
    let config: Config = match format {
        ConfigFormat::Json => serde_json::from_str(text).context("invalid JSON config")?,
        ConfigFormat::Toml => toml::from_str(text).context("invalid TOML config")?,
    };
    config.validate()?;
    Ok(config)
}

/// ファイルから設定を読む
pub fn load_config(path: &Path) -> Result<Config> {
    let text = read_text(path).with_context(|| format!("failed to read {}", path.display()))?;
    let config = parse_config(&text, ConfigFormat::from_path(path))
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}
