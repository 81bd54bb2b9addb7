use super::alpha_beta::PruneRule;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "ai_config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AIConfig {
    pub version: String,
    pub evaluation: EvaluationConfig,
    pub search: SearchConfig,
}

/// 評価関数の重み
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    pub corner_weight: i32,
    pub edge_weight: i32,
    pub interior_weight: i32,
    /// 終局時に勝っている側へ加える値
    pub terminal_bonus: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub depth: u32,
    pub prune_rule: PruneRule,
    /// 評価値やカットを stderr に出す
    pub trace: bool,
    /// 設定されていれば探索ごとに探索木のイベントを JSON で書き出す (例: search_trace.json)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_file: Option<PathBuf>,
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: AIConfig = serde_json::from_str(&config_str)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|_| Self::default())
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let file = std::fs::File::create(path.as_ref())
            .with_context(|| format!("failed to create {}", path.as_ref().display()))?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        EvaluationConfig {
            corner_weight: 100,
            edge_weight: 10,
            interior_weight: 1,
            terminal_bonus: 10000,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            prune_rule: PruneRule::Standard,
            trace: false,
            trace_file: None,
        }
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            evaluation: EvaluationConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_json_round_trip() {
        let mut config = AIConfig::default();
        config.search.depth = 5;
        config.search.prune_rule = PruneRule::Legacy;
        config.search.trace_file = Some(PathBuf::from("search_trace.json"));

        let path = std::env::temp_dir().join(format!("ai_config_{}.json", std::process::id()));
        config.save_to(&path).unwrap();
        let loaded = AIConfig::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let path = std::env::temp_dir().join("definitely_missing_ai_config.json");
        let err = AIConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_trace_file_is_optional_in_json() {
        let json = r#"{
            "version": "1.0",
            "evaluation": {"corner_weight": 100, "edge_weight": 10, "interior_weight": 1, "terminal_bonus": 10000},
            "search": {"depth": 2, "prune_rule": "Standard", "trace": false}
        }"#;
        let config: AIConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.search.trace_file, None);
        assert_eq!(config.search.depth, 2);
    }

    #[test]
    fn test_prune_rule_serializes_as_name() {
        let json = serde_json::to_string(&SearchConfig::default()).unwrap();
        assert!(json.contains("\"Standard\""));
    }
}
