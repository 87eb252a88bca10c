use clap::{Arg, ArgAction, Command};

use crate::config::MAX_THREADS;

const BIN_NAME: &str = "hystogram";

/// Declares the command-line interface for help rendering.
///
/// Arguments are scanned by [`crate::params::ParamParser`]; this command is
/// never asked to parse anything.
pub fn command(default_memory_mb: u64, default_threads: usize) -> Command {
    Command::new(BIN_NAME)
        .about("Computes a histogram of the input file")
        .override_usage(format!("{BIN_NAME} [options] <input_file> <output_file>"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .short('h')
                .long("help")
                .action(ArgAction::Help)
                .help("Print this help"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable verbose mode"),
        )
        .arg(
            Arg::new("threads")
                .short('n')
                .value_name("N")
                .help(format!(
                    "Set thread count to N [1-{MAX_THREADS}] (default is {default_threads})"
                )),
        )
        .arg(
            Arg::new("memory")
                .short('m')
                .value_name("M")
                .help(format!(
                    "Set maximum memory to M Mbytes (default is {default_memory_mb})"
                )),
        )
        .arg(
            Arg::new("input_file")
                .value_name("input_file")
                .required(true)
                .help("Existing file to build the histogram from"),
        )
        .arg(
            Arg::new("output_file")
                .value_name("output_file")
                .required(true)
                .help("File the histogram is written to"),
        )
}

/// Plain-text help, without terminal styling.
pub fn render(default_memory_mb: u64, default_threads: usize) -> String {
    command(default_memory_mb, default_threads)
        .render_help()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        command(1024, 4).debug_assert();
    }

    #[test]
    fn usage_line_and_options() {
        let text = render(1024, 4);
        assert!(text.contains("Usage: hystogram [options] <input_file> <output_file>"));
        assert!(text.contains("-h, --help"));
        assert!(text.contains("-v, --verbose"));
        assert!(text.contains("-n <N>"));
        assert!(text.contains("-m <M>"));
    }

    #[test]
    fn defaults_appear_in_help() {
        let text = render(2048, 7);
        assert!(text.contains("default is 2048"));
        assert!(text.contains("default is 7"));
        assert!(text.contains("[1-32]"));
    }
}
