use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::scoring::{HotWeights, RankWeights, ScoreWeights};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingConfig {
    pub score: ScoreWeights,
    pub rank: RankWeights,
    pub hot: HotWeights,
}

impl RankingConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                RankingConfig::default()
            }
        } else {
            RankingConfig::default()
        };

        config.apply_env_overrides();
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload)
            .map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("RANK_LAST_POST_DECAY") {
            if let Ok(parsed) = value.parse::<f64>() {
                self.rank.last_post_decay = parsed;
            }
        }
        if let Ok(value) = env::var("RANK_AGE_DECAY") {
            if let Ok(parsed) = value.parse::<f64>() {
                self.rank.age_decay = parsed;
            }
        }
        if let Ok(value) = env::var("HOT_TIME_DIVISOR") {
            if let Ok(parsed) = value.parse::<f64>() {
                self.hot.time_divisor = parsed;
            }
        }
        if let Ok(value) = env::var("SCORE_MINIMUM") {
            if let Ok(parsed) = value.parse::<i64>() {
                self.score.minimum = parsed;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("RANKING_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/ranking.toml")))
}
