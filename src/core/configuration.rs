use log::debug;
use serde::Deserialize;
use std::path::Path;
use tokio::{fs::File, io::AsyncReadExt};

use sections::LogConfiguration;

use super::common::BoxedError;

pub mod sections;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Configuration {
    #[serde(default)]
    pub log: LogConfiguration,
}

#[derive(Debug)]
pub struct ConfigurationError {
    reason: String,
}

impl ConfigurationError {
    pub fn new(reason: String) -> Self {
        Self { reason }
    }
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for ConfigurationError {}

/// ### Load the configuration file
/// ### Errors
/// * `ConfigurationError` - if the file is missing, is not UTF-8 or is not valid TOML
/// * `std::io::Error` - if the file cannot be read
pub async fn get_configuration(file_path: &str) -> Result<Configuration, BoxedError> {
    let path = Path::new(file_path);

    if !path.exists() {
        return Err(Box::new(ConfigurationError::new(
            "configuration file is missing".to_string(),
        )));
    }

    debug!("loading configuration from {file_path}");

    let mut file = File::open(path).await?;
    let mut buffer = vec![];

    file.read_to_end(&mut buffer).await?;

    let content = String::from_utf8(buffer).map_err(|e| {
        ConfigurationError::new(format!("configuration file is corrupted: {e}"))
    })?;

    match toml::from_str::<Configuration>(&content) {
        Ok(c) => Ok(c),
        Err(e) => Err(Box::new(ConfigurationError::new(format!(
            "configuration file is corrupted: {}",
            e.message()
        )))),
    }
}
