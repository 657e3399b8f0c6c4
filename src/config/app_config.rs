use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// On-disk shape of `<config_dir>/passforge/config.toml`. Every field is
/// optional; missing file or unparsable content falls back to defaults.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct FileConfig {
    // Generator defaults
    pub generator_length: Option<u16>,
    pub avoid_ambiguous: Option<bool>,
    // Clipboard restore delay in seconds
    pub clipboard_ttl: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub generator_length: Option<u16>,
    pub avoid_ambiguous: Option<bool>,
    pub clipboard_ttl: Option<u64>,
}

impl Config {
    /// Resolve effective settings with precedence env > config file > None
    /// (the caller applies the library default for None).
    pub fn create() -> Self {
        let file_cfg = load_file_config();

        let generator_length = env::var("PASSFORGE_GEN_LENGTH")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .or(file_cfg.generator_length);
        let avoid_ambiguous = env::var("PASSFORGE_AVOID_AMBIGUOUS")
            .ok()
            .and_then(|s| s.parse::<bool>().ok())
            .or(file_cfg.avoid_ambiguous);
        let clipboard_ttl = env::var("PASSFORGE_CLIP_TTL")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .or(file_cfg.clipboard_ttl);

        Config {
            generator_length,
            avoid_ambiguous,
            clipboard_ttl,
        }
    }
}

fn load_file_config() -> FileConfig {
    let (_, cfg) = load_file_config_with_path();
    cfg
}

pub fn load_file_config_with_path() -> (PathBuf, FileConfig) {
    // Allow tests/users to override config dir via PASSFORGE_CONFIG_DIR
    let cfg_dir = if let Ok(p) = env::var("PASSFORGE_CONFIG_DIR") {
        PathBuf::from(p)
    } else {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    };
    let path = cfg_dir.join("passforge").join("config.toml");
    let cfg = if let Ok(bytes) = std::fs::read(&path) {
        if let Ok(s) = String::from_utf8(bytes) {
            toml::from_str::<FileConfig>(&s).unwrap_or_default()
        } else {
            FileConfig::default()
        }
    } else {
        FileConfig::default()
    };
    (path, cfg)
}
