use once_cell::sync::Lazy;
use std::{fs, path::PathBuf, time::Duration};
use thiserror::Error;

use marquee_core::config::{
    DEFAULT_REGION, DEFAULT_REQUEST_TIMEOUT, DEFAULT_TMDB_BASE_URL, is_usable_credential,
};

use super::{
    Config, ConfigMetadata, ConfigWarnings, CorsConfig, DEFAULT_HOST, DEFAULT_IMAGE_BASE_URL,
    DEFAULT_PORT, ServerConfig, TmdbConfig,
    sources::{EnvConfig, FileConfig},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("marquee.toml"),
        PathBuf::from("config/marquee.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    /// Loads `.env`, reads the process environment, then the config file.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path)
                .map(|_| true)
                .or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?,
            None => dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                dotenvy::Error::Io(_) => Ok(false),
                _ => Err(err),
            })?,
        };

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Same as [`ConfigLoader::load`] with an explicit environment snapshot.
    pub fn load_with_env(&self, env: EnvConfig) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        self.compose_config(file_config, env, config_path)
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        // Explicit paths must exist; default locations are optional.
        let (path, required) = match (&self.options.config_path, &env.config_path) {
            (Some(explicit), _) => (Some(explicit.clone()), true),
            (None, Some(from_env)) => (Some(from_env.clone()), true),
            (None, None) => (
                DEFAULT_CONFIG_LOCATIONS
                    .iter()
                    .find(|candidate| candidate.exists())
                    .cloned(),
                false,
            ),
        };

        let Some(path) = path else {
            return Ok((None, None));
        };

        if !path.exists() {
            if required {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigLoadError::Io {
            path: path.clone(),
            source,
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| ConfigLoadError::Parse {
                path: path.clone(),
                source,
            })?;

        Ok((Some(file_config), Some(path)))
    }

    fn compose_config(
        &self,
        file_config: Option<FileConfig>,
        env: EnvConfig,
        config_path: Option<PathBuf>,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        if config_path.is_none() {
            warnings.push_with_hint(
                "No marquee.toml detected; using environment variables and defaults",
                "Create marquee.toml or set MARQUEE_CONFIG to point at a configuration file",
            );
        }

        let FileConfig {
            server: file_server,
            tmdb: file_tmdb,
            cors: file_cors,
        } = file_config.unwrap_or_default();

        let server = ServerConfig {
            host: env
                .server_host
                .or(file_server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: env.server_port.or(file_server.port).unwrap_or(DEFAULT_PORT),
        };

        let request_timeout = match env.tmdb_request_timeout.or(file_tmdb.request_timeout) {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        let tmdb = TmdbConfig {
            api_key: env
                .tmdb_api_key
                .or(file_tmdb.api_key)
                .map(|key| key.trim().to_string()),
            base_url: env
                .tmdb_base_url
                .or(file_tmdb.base_url)
                .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string()),
            image_base_url: env
                .tmdb_image_base_url
                .or(file_tmdb.image_base_url)
                .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string()),
            region: env
                .tmdb_region
                .or(file_tmdb.region)
                .map(|region| region.trim().to_ascii_uppercase())
                .filter(|region| !region.is_empty())
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
            request_timeout,
        };

        if !tmdb.api_key.as_deref().is_some_and(is_usable_credential) {
            warnings.push_with_hint(
                "TMDB API key is missing or still the placeholder; serving the built-in catalog",
                "Set TMDB_API_KEY or tmdb.api_key to enable live data",
            );
        }

        let cors = CorsConfig {
            allowed_origins: env
                .cors_allowed_origins
                .or(file_cors.allowed_origins)
                .filter(|origins| !origins.is_empty())
                .unwrap_or_else(default_cors_origins),
        };

        if cors.is_wildcard_included() {
            warnings.push("CORS allows any origin");
        }

        let config = Config {
            server,
            tmdb,
            cors,
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded: false,
            },
        };

        Ok(ConfigLoad { config, warnings })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigLoadError> {
    let value = raw.trim();
    let timeout =
        humantime::parse_duration(value).map_err(|source| ConfigLoadError::InvalidTimeout {
            value: value.to_string(),
            source,
        })?;
    if timeout.is_zero() {
        return Err(ConfigLoadError::ZeroTimeout);
    }
    Ok(timeout)
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid request timeout '{value}'")]
    InvalidTimeout {
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
    #[error(transparent)]
    Env(#[from] dotenvy::Error),
}
