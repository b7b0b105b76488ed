use crate::error::{GradebookError, GradebookResult};
use crate::store::IntegrityMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const CONFIG_ENV_VAR: &str = "GRADEBOOK_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/gradebook.json";

/// Configuration for the gradebook HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Directory holding `Courses.json`, `Students.json` and `Grades.json`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Foreign-key handling for mutations
    #[serde(default)]
    pub integrity: IntegrityMode,
    /// Serve the GraphiQL IDE on `GET /graphql`
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            data_dir: default_data_dir(),
            integrity: IntegrityMode::default(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerConfig {
    /// Replace the port of `bind_address`, keeping the host.
    pub fn with_port(mut self, port: u16) -> Self {
        let host = match self.bind_address.rsplit_once(':') {
            Some((host, _)) => host.to_string(),
            None => self.bind_address.clone(),
        };
        self.bind_address = format!("{}:{}", host, port);
        self
    }

    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    pub fn with_integrity(mut self, integrity: IntegrityMode) -> Self {
        self.integrity = integrity;
        self
    }

    pub fn validate(&self) -> GradebookResult<()> {
        if self.bind_address.trim().is_empty() {
            return Err(GradebookError::Config(
                "bind_address must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Load a server configuration from the given path or from the
/// `GRADEBOOK_CONFIG` environment variable.
///
/// If the file does not exist, a default [`ServerConfig`] is returned. A file
/// that exists but cannot be parsed is an error.
pub fn load_server_config(path: Option<&str>) -> GradebookResult<ServerConfig> {
    use std::fs;

    let config_path = path
        .map(|p| p.to_string())
        .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = match fs::read_to_string(&config_path) {
        Ok(config_str) => serde_json::from_str::<ServerConfig>(&config_str).map_err(|e| {
            log::error!("Failed to parse server configuration {}: {}", config_path, e);
            GradebookError::Config(format!("{}: {}", config_path, e))
        })?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("No configuration at {}, using defaults", config_path);
            ServerConfig::default()
        }
        Err(e) => return Err(e.into()),
    };

    config.validate()?;
    Ok(config)
}
