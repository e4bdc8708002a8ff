use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Initialise logging. With `debug` set the default level is `debug` and can
/// be overridden through `RUST_LOG`; otherwise the level is fixed at `info`.
/// When `log_file` is given, output goes to that file instead of stderr.
pub fn init(debug: bool, log_file: Option<PathBuf>) -> anyhow::Result<()> {
    // Ignore `RUST_LOG` unless debug logging was asked for, so a stray
    // variable in the user's environment cannot flood the console.
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(debug)))
    } else {
        EnvFilter::new(level_for(debug))
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let _ = match log_file {
        Some(path) => {
            let appender = file_appender(&path)?;
            builder.with_writer(appender).with_ansi(false).try_init()
        }
        None => builder.try_init(),
    };
    Ok(())
}

pub fn level_for(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

fn file_appender(path: &Path) -> anyhow::Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("log file path {} has no file name", path.display()))?;
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)?;
    Ok(appender)
}
