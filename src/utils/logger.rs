use std::fs::{self, OpenOptions};
use std::io::Write;
use chrono::Local;
use crate::config::KwicConfig;
use crate::error::{Error, Result};

/// Install the global logger: `<timestamp> [<LEVEL>] - <message>` lines,
/// appended to the configured log file or written to stderr.
pub fn init_logging(config: &KwicConfig) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, config.output.get_log_level());

    match &config.files.log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(log_file)));
        }
        None => {
            builder.target(env_logger::Target::Stderr);
        }
    }

    builder
        .try_init()
        .map_err(|e| Error::config(format!("Logger already initialized: {}", e)))
}
