//! 升目の背景スタイルの合成
//!
//! 各オーバーレイは [`StylePatch`] として表現し、優先順位の低い順に畳み込む。
//! 同じプロパティを持つパッチは後のものが勝つ。

use serde::{Deserialize, Serialize};

/// 背景スタイルの差分
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StylePatch {
    /// 背景色（"#rrggbb" 等）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// 不透明度（0.0-1.0）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl StylePatch {
    /// 色と不透明度を指定して生成
    pub fn new(background_color: &str, opacity: f64) -> StylePatch {
        StylePatch {
            background_color: Some(background_color.to_string()),
            opacity: Some(opacity),
        }
    }

    /// `top` を上に重ねた結果（`top` が持つプロパティが優先）
    pub fn overlay(self, top: &StylePatch) -> StylePatch {
        StylePatch {
            background_color: top.background_color.clone().or(self.background_color),
            opacity: top.opacity.or(self.opacity),
        }
    }

    /// 何も指定していないか
    pub fn is_empty(&self) -> bool {
        self.background_color.is_none() && self.opacity.is_none()
    }
}

/// パッチを先頭から順に重ねる
pub fn compose<'a>(patches: impl IntoIterator<Item = &'a StylePatch>) -> StylePatch {
    patches.into_iter().fold(StylePatch::default(), StylePatch::overlay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_empty() {
        assert!(compose(Vec::<&StylePatch>::new()).is_empty());
    }

    #[test]
    fn test_later_patch_wins() {
        let threat = StylePatch::new("#0000ff", 0.4);
        let selected = StylePatch::new("#ff4800", 0.5);
        assert_eq!(compose([&threat, &selected]), selected);
        assert_eq!(compose([&selected, &threat]), threat);
    }

    #[test]
    fn test_partial_patch_keeps_other_properties() {
        let base = StylePatch::new("#01bf09", 0.8);
        let dim = StylePatch {
            background_color: None,
            opacity: Some(0.2),
        };
        let merged = compose([&base, &dim]);
        assert_eq!(merged.background_color.as_deref(), Some("#01bf09"));
        assert_eq!(merged.opacity, Some(0.2));
    }

    #[test]
    fn test_deserialize_rejects_unknown_property() {
        let patch: StylePatch =
            serde_json::from_str(r##"{"background_color":"#ff0000"}"##).unwrap();
        assert_eq!(patch.background_color.as_deref(), Some("#ff0000"));
        assert_eq!(patch.opacity, None);
        assert!(serde_json::from_str::<StylePatch>(r#"{"border":"1px"}"#).is_err());
    }
}
