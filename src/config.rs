use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::codec::CodecKind;
use crate::models::SEED_NAMES;

/// 配置文件结构 (~/.config/roster/config.toml)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 跳转结果页时使用的编码方式
    pub codec: CodecKind,
    /// 启动时的初始名单
    pub seed: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            codec: CodecKind::default(),
            seed: SEED_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// 获取配置文件路径；平台没有配置目录时返回 `None`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("roster").join("config.toml"))
}

/// 加载用户配置，没有配置目录时使用默认值
pub fn load_user_config() -> io::Result<Config> {
    load_config_from(config_path().as_deref())
}

fn load_config_from(path: Option<&Path>) -> io::Result<Config> {
    match path {
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> io::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.codec, CodecKind::Json);
        assert_eq!(config.seed, vec!["Tanu", "Tina", "Tono"]);
    }

    #[test]
    fn test_no_config_dir_uses_defaults() {
        assert_eq!(load_config_from(None).unwrap(), Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "codec = \"flat\"\nunknown = 1\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.codec, CodecKind::Flat);
        assert_eq!(config.seed.len(), 3);
    }

    #[test]
    fn test_load_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "seed = []\n").unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.seed.is_empty());
        assert_eq!(config.codec, CodecKind::Json);
    }

    #[test]
    fn test_malformed_file_is_invalid_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "codec = \"yaml\"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
