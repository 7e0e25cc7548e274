//! Generator configuration, resolved once at startup.
//!
//! | Source | Example |
//! |--------|---------|
//! | defaults | app_name "Podcast Generator", host 127.0.0.1, port 8000 |
//! | TOML file (`PODSCRIPT_CONFIG`, default `config/podscript.toml`) | `generation_url = "http://..."` |
//! | environment, prefix `PODSCRIPT_` | `PODSCRIPT_GENERATION_URL`, `PODSCRIPT_PORT` |

use serde::Deserialize;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config/podscript.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    /// Endpoint of the external generation service. Required.
    #[serde(default)]
    pub generation_url: String,
}

impl GeneratorConfig {
    /// Load config from file and environment. Precedence: env > file > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("PODSCRIPT_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Same as `load` with an explicit file path. A missing file is skipped.
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("app_name", "Podcast Generator")?
            .set_default("host", "127.0.0.1")?
            .set_default("port", 8000_i64)?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("PODSCRIPT").try_parsing(true))
            .build()?;

        let cfg: Self = built.try_deserialize()?;
        cfg.validated()
    }

    fn validated(mut self) -> Result<Self, config::ConfigError> {
        self.generation_url = self.generation_url.trim().to_string();
        if self.generation_url.is_empty() {
            return Err(config::ConfigError::Message(
                "generation_url is not set (config file or PODSCRIPT_GENERATION_URL)".to_string(),
            ));
        }
        Ok(self)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
