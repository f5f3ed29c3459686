//! Tracing setup for the acejump crates.
//!
//! Events always reach a log file. They are mirrored to stderr when `ACEJUMP_LOG` or
//! `RUST_LOG` is set, and in debug builds.
//!
//! ## Filtering
//!
//! The first of these that is set decides the directives:
//!
//! 1. **`ACEJUMP_LOG`**: a bare level such as `debug` applies to every acejump crate and
//!    keeps everything else at `warn`. A value containing `=`, `:` or `,` is a full
//!    [`EnvFilter`] directive string and is used verbatim.
//! 2. **`RUST_LOG`**: used verbatim.
//! 3. Neither: stderr shows `info` for acejump crates, the file only records `warn`.
//!
//! ## Log file
//!
//! `<data_local_dir>/acejump/logs/acejump-<pid>.log` unless `--log-file` names a file
//! (anything with an extension) or a directory to put the default file name in.

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

const CRATES: &[&str] = &["acejump", "acejump_config", "acejump_bin", "acejump_log"];

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Keeps the background file writer alive. Dropping it flushes pending events.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Debug, Default)]
pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Directory and file name of the log file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogFile {
    dir: PathBuf,
    name: String,
}

impl LogFile {
    fn resolve(override_path: Option<PathBuf>) -> Self {
        let default_name = format!("acejump-{}.log", std::process::id());

        match override_path {
            Some(path) if path.extension().is_some() => {
                let dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
                let name = path
                    .file_name()
                    .map_or(default_name, |name| name.to_string_lossy().into_owned());
                Self { dir, name }
            },
            Some(dir) => Self {
                dir,
                name: default_name,
            },
            None => Self {
                dir: dirs::data_local_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("acejump")
                    .join("logs"),
                name: default_name,
            },
        }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }
}

/// Install the global subscriber. Hold the returned guard until exit.
pub fn init(config: LogConfig) -> Result<LogGuard, BoxError> {
    let log_file = LogFile::resolve(config.log_file_path);
    std::fs::create_dir_all(&log_file.dir)?;

    let appender = tracing_appender::rolling::never(&log_file.dir, &log_file.name);
    let (writer, file_guard) = tracing_appender::non_blocking(appender);

    let user_directives = env_directives();
    let file_directives = user_directives.clone().unwrap_or_else(|| "warn".to_string());
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(EnvFilter::try_new(file_directives)?);

    // Stdout belongs to the CLI's report.
    let stderr_layer = console_filter(user_directives.as_deref(), cfg!(debug_assertions))?
        .map(|filter| fmt::layer().with_writer(std::io::stderr).with_filter(filter));

    Registry::default()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_file.path(),
    })
}

/// Route events to the test harness output. Safe to call from every test.
pub fn test() {
    let Ok(filter) = stderr_filter(env_directives().as_deref()) else {
        return;
    };
    fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Filter for the stderr layer, or `None` when release builds run without log variables.
fn console_filter(
    directives: Option<&str>,
    debug_build: bool,
) -> Result<Option<EnvFilter>, BoxError> {
    match directives {
        Some(directives) => Ok(Some(stderr_filter(Some(directives))?)),
        None if debug_build => Ok(Some(stderr_filter(None)?)),
        None => Ok(None),
    }
}

fn stderr_filter(directives: Option<&str>) -> Result<EnvFilter, BoxError> {
    let directives = directives.map_or_else(|| expand_directives("info"), str::to_string);
    Ok(EnvFilter::try_new(directives)?)
}

/// Directives from `ACEJUMP_LOG`, then `RUST_LOG`.
fn env_directives() -> Option<String> {
    env::var("ACEJUMP_LOG")
        .map(|level| expand_directives(&level))
        .or_else(|_| env::var("RUST_LOG"))
        .ok()
}

/// `debug` becomes `warn,acejump=debug,acejump_config=debug,...`; full directive strings
/// pass through.
fn expand_directives(level: &str) -> String {
    if level.contains(['=', ':', ',']) {
        return level.to_string();
    }

    CRATES.iter().fold(String::from("warn"), |mut directives, name| {
        directives.push_str(&format!(",{name}={level}"));
        directives
    })
}
