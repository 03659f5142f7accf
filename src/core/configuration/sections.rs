use serde::Deserialize;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_RETENTION: usize = 7;
pub const DEFAULT_LOG_DIRECTORY: &str = ".";

#[derive(Deserialize, Clone, Debug, Default)]
pub struct LogConfiguration {
    pub level: Option<String>,
    pub retention: Option<usize>,
    pub directory: Option<String>,
    /// module path prefixes whose records are dropped
    pub ignore: Option<Vec<String>>,
}

impl LogConfiguration {
    pub fn level_or_default(&self) -> &str {
        self.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn retention_or_default(&self) -> usize {
        self.retention.unwrap_or(DEFAULT_LOG_RETENTION)
    }

    pub fn directory_or_default(&self) -> &str {
        self.directory.as_deref().unwrap_or(DEFAULT_LOG_DIRECTORY)
    }
}
