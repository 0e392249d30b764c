//! Log file setup.
//!
//! The game owns the terminal, so records go to a file instead of stderr.
//! Level comes from `RUST_LOG` (default `info`).

use directories::ProjectDirs;
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

const LOG_FILE_NAME: &str = "dino-runner.log";

/// Default log location: `<data dir>/dino-runner.log`, or the working
/// directory when no home directory can be determined.
pub fn default_log_path() -> PathBuf {
    ProjectDirs::from("", "", "dino-runner")
        .map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}

/// Route `log` records to `path` (or the default location). Returns the file
/// actually used.
pub fn init(path: Option<&Path>) -> io::Result<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(io::Error::other)?;

    Ok(path)
}
