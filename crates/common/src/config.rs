use crate::error::CourseMatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which embedding collaborator backs the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingBackend {
    /// Remote Ollama embedding API
    Ollama,
    /// Offline feature-hashing embedder
    Hashing,
}

impl FromStr for EmbeddingBackend {
    type Err = CourseMatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "hashing" => Ok(Self::Hashing),
            other => Err(CourseMatchError::config(format!(
                "Unknown embedding backend '{}' (expected 'ollama' or 'hashing')",
                other
            ))),
        }
    }
}

impl fmt::Display for EmbeddingBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ollama => write!(f, "ollama"),
            Self::Hashing => write!(f, "hashing"),
        }
    }
}

/// CourseMatch application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Embedding backend
    pub embedding_backend: EmbeddingBackend,

    /// Ollama API base URL
    pub ollama_base_url: String,

    /// Embedding model name
    pub embedding_model: String,

    /// Output dimension of the hashing backend
    pub hashing_dimension: usize,

    /// Concurrent embedding calls while building the store
    pub embed_concurrency: usize,

    /// `k` used when a request does not specify one
    pub default_top_k: usize,

    /// Upper bound on `k`; larger requests are clamped to it
    pub max_top_k: usize,

    /// Allowed CORS origins
    pub cors_origins: Vec<String>,

    /// URL pinged periodically to keep the host awake
    pub keepalive_url: Option<String>,

    /// Keep-alive period in seconds
    pub keepalive_interval_secs: u64,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            embedding_backend: EmbeddingBackend::Ollama,
            ollama_base_url: "http://localhost:11434".to_string(),
            embedding_model: "all-minilm".to_string(),
            hashing_dimension: 384,
            embed_concurrency: 4,
            default_top_k: 3,
            max_top_k: 50,
            cors_origins: vec!["http://localhost:5173".to_string()],
            keepalive_url: None,
            keepalive_interval_secs: 14 * 60,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// The binary loads `.env` before calling this.
    pub fn from_env() -> Result<Self, CourseMatchError> {
        let defaults = Self::default();

        let embedding_backend = match std::env::var("EMBEDDING_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.embedding_backend,
        };

        let config = Self {
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: Self::get_env_parsed("SERVER_PORT").unwrap_or(defaults.server_port),
            embedding_backend,
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or(defaults.ollama_base_url),
            embedding_model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or(defaults.embedding_model),
            hashing_dimension: Self::get_env_parsed("HASHING_DIMENSION")
                .unwrap_or(defaults.hashing_dimension),
            embed_concurrency: Self::get_env_parsed("EMBED_CONCURRENCY")
                .unwrap_or(defaults.embed_concurrency),
            default_top_k: Self::get_env_parsed("DEFAULT_TOP_K").unwrap_or(defaults.default_top_k),
            max_top_k: Self::get_env_parsed("MAX_TOP_K").unwrap_or(defaults.max_top_k),
            cors_origins: std::env::var("CORS_ORIGINS")
                .map(|s| parse_list(&s))
                .unwrap_or(defaults.cors_origins),
            keepalive_url: std::env::var("KEEPALIVE_URL")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            keepalive_interval_secs: Self::get_env_parsed("KEEPALIVE_INTERVAL_SECS")
                .unwrap_or(defaults.keepalive_interval_secs),
            log_dir: std::env::var("LOG_DIR")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        config.validate()?;

        Ok(config)
    }

    /// Parse a value from an environment variable, ignoring unparsable input
    fn get_env_parsed<T: FromStr>(key: &str) -> Option<T> {
        std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), CourseMatchError> {
        if self.embedding_model.is_empty() {
            return Err(CourseMatchError::config("Embedding model name cannot be empty"));
        }

        if self.embedding_backend == EmbeddingBackend::Ollama
            && !self.ollama_base_url.starts_with("http://")
            && !self.ollama_base_url.starts_with("https://")
        {
            return Err(CourseMatchError::config(
                "Ollama base URL must start with http:// or https://",
            ));
        }

        if self.server_port == 0 {
            return Err(CourseMatchError::config("Server port cannot be 0"));
        }

        if self.hashing_dimension == 0 {
            return Err(CourseMatchError::config("Hashing dimension must be at least 1"));
        }

        if self.embed_concurrency == 0 {
            return Err(CourseMatchError::config("Embedding concurrency must be at least 1"));
        }

        if self.default_top_k == 0 || self.default_top_k > self.max_top_k {
            return Err(CourseMatchError::config(format!(
                "Default top_k must be between 1 and {}",
                self.max_top_k
            )));
        }

        if self.keepalive_interval_secs == 0 {
            return Err(CourseMatchError::config("Keep-alive interval cannot be 0"));
        }

        Ok(())
    }
}

/// Split a comma-separated list, dropping blanks
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
