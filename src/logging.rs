//! Log setup for the binary.

fn level_label(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Installs an `env_logger` writing to stderr. `RUST_LOG` overrides the level.
pub fn init_logging(verbose: bool) -> Result<(), log::SetLoggerError> {
    use std::io::Write;

    let env = env_logger::Env::default().default_filter_or(default_filter(verbose));
    env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(buf, "[{}] {}", level_label(record.level()), record.args())
        })
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_selects_debug() {
        assert_eq!(default_filter(true), "debug");
        assert_eq!(default_filter(false), "info");
    }

    #[test]
    fn labels_are_aligned() {
        for level in [
            log::Level::Error,
            log::Level::Warn,
            log::Level::Info,
            log::Level::Debug,
            log::Level::Trace,
        ] {
            assert_eq!(level_label(level).len(), 5);
        }
    }
}
