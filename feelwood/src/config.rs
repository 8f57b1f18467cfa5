use feelwood_infra::SanityConfig;
use feelwood_service::PresentationSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::error::{FeelwoodError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub sanity: SanitySection,
    pub site: SiteConfig,
    pub presentation: PresentationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8090,
            host: "0.0.0.0".to_string(),
        }
    }
}

/// 内容库连接，`project_id` 和 `dataset` 必填
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitySection {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    pub perspective: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for SanitySection {
    fn default() -> Self {
        let client = SanityConfig::default();
        Self {
            project_id: client.project_id,
            dataset: client.dataset,
            api_version: client.api_version,
            use_cdn: client.use_cdn,
            perspective: client.perspective,
            token: client.token,
            timeout_secs: client.timeout.as_secs(),
        }
    }
}

impl SanitySection {
    pub fn client_config(&self) -> SanityConfig {
        SanityConfig {
            project_id: self.project_id.trim().to_string(),
            dataset: self.dataset.trim().to_string(),
            api_version: self.api_version.clone(),
            use_cdn: self.use_cdn,
            perspective: self.perspective.clone().filter(|p| !p.trim().is_empty()),
            token: self.token.clone().filter(|t| !t.trim().is_empty()),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub name: String,
    /// 对外访问地址，用于生成绝对分享链接
    pub external_url: Option<String>,
    /// 覆盖内置模板的主题目录
    pub theme_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Feel Wood".to_string(),
            external_url: None,
            theme_dir: None,
        }
    }
}

impl SiteConfig {
    pub fn external_url(&self) -> Result<Option<Url>> {
        match self.external_url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            Some(raw) => Url::parse(raw)
                .map(Some)
                .map_err(|e| FeelwoodError::Validation(format!("site.external_url {}: {}", raw, e))),
            None => Ok(None),
        }
    }
}

/// 时间单位为毫秒
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub hero_interval_ms: u64,
    pub rotation_interval_ms: u64,
    pub fade_duration_ms: u64,
    pub rotation_window: usize,
    pub narrow_breakpoint: u32,
    pub narrow_page_size: usize,
    pub wide_page_size: usize,
    pub home_post_limit: usize,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        let settings = PresentationSettings::default();
        Self {
            hero_interval_ms: duration_ms(settings.hero_interval),
            rotation_interval_ms: duration_ms(settings.rotation_interval),
            fade_duration_ms: duration_ms(settings.fade_duration),
            rotation_window: settings.rotation_window,
            narrow_breakpoint: settings.narrow_breakpoint,
            narrow_page_size: settings.narrow_page_size,
            wide_page_size: settings.wide_page_size,
            home_post_limit: settings.home_post_limit,
        }
    }
}

impl From<&PresentationConfig> for PresentationSettings {
    fn from(config: &PresentationConfig) -> Self {
        Self {
            hero_interval: Duration::from_millis(config.hero_interval_ms),
            rotation_interval: Duration::from_millis(config.rotation_interval_ms),
            fade_duration: Duration::from_millis(config.fade_duration_ms),
            rotation_window: config.rotation_window,
            narrow_breakpoint: config.narrow_breakpoint,
            narrow_page_size: config.narrow_page_size,
            wide_page_size: config.wide_page_size,
            home_post_limit: config.home_post_limit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter指令，`RUST_LOG` 优先
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Config {
    /// 依次读取 `feelwood.toml`、`~/.feelwood/feelwood.toml` 和 `FEELWOOD__` 环境变量，后者覆盖前者
    pub fn load() -> Result<Self> {
        // .env中的变量先进入进程环境，再由Environment读取；没有.env时忽略
        dotenv::dotenv().ok();

        let home_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let user_config = home_dir.join(".feelwood").join("feelwood.toml");

        Self::from_sources(Path::new("feelwood.toml"), &user_config)
    }

    fn from_sources(local: &Path, user: &Path) -> Result<Self> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from(local).required(false))
            .add_source(config::File::from(user).required(false))
            .add_source(
                config::Environment::with_prefix("FEELWOOD")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sanity.project_id.trim().is_empty() {
            return Err(FeelwoodError::Validation("sanity.project_id is required".to_string()));
        }
        if self.sanity.dataset.trim().is_empty() {
            return Err(FeelwoodError::Validation("sanity.dataset is required".to_string()));
        }
        if self.sanity.timeout_secs == 0 {
            return Err(FeelwoodError::Validation("sanity.timeout_secs must be positive".to_string()));
        }

        let presentation = &self.presentation;
        if presentation.rotation_window == 0
            || presentation.narrow_page_size == 0
            || presentation.wide_page_size == 0
        {
            return Err(FeelwoodError::Validation(
                "presentation window and page sizes must be positive".to_string(),
            ));
        }
        if presentation.hero_interval_ms == 0 || presentation.rotation_interval_ms == 0 {
            return Err(FeelwoodError::Validation(
                "presentation intervals must be positive".to_string(),
            ));
        }

        self.site.external_url()?;
        Ok(())
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
