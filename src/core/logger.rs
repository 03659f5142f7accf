use flexi_logger::{
    filter::{self, LogLineFilter},
    Age, Cleanup, Criterion, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
};

use super::{common::BoxedError, configuration::sections::LogConfiguration};

pub const LOG_BASENAME: &str = "yubikey-login";

/// Drops records emitted from any module whose path starts with one of `prefixes`.
pub struct IgnoreModules {
    prefixes: Vec<String>,
}

impl IgnoreModules {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    fn is_ignored(&self, path: &str) -> bool {
        self.prefixes
            .iter()
            .any(|p| path == p.as_str() || path.starts_with(&format!("{p}::")))
    }
}

impl LogLineFilter for IgnoreModules {
    fn write(
        &self,
        now: &mut flexi_logger::DeferredNow,
        record: &log::Record,
        log_line_writer: &dyn filter::LogLineWriter,
    ) -> std::io::Result<()> {
        let path = record.module_path().unwrap_or_default();

        if self.is_ignored(path) {
            return Ok(());
        }

        log_line_writer.write(now, record)
    }
}

/// ### Start the logger
/// Writes to daily rotated files in the configured directory and mirrors
/// everything to stderr. Keep the returned handle alive for as long as
/// logging is needed.
pub fn init(conf: &LogConfiguration) -> Result<LoggerHandle, BoxedError> {
    let ignored = conf.ignore.clone().unwrap_or_default();

    let handle = Logger::try_with_str(conf.level_or_default())?
        .log_to_file(
            FileSpec::default()
                .directory(conf.directory_or_default())
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(conf.retention_or_default()),
        )
        .duplicate_to_stderr(Duplicate::All)
        .filter(Box::new(IgnoreModules::new(ignored)))
        .start()?;

    Ok(handle)
}
