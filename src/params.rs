use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{Configuration, DEFAULT_MAX_MEMORY_MB, MAX_THREADS};
use crate::error::ParamError;
use crate::usage;

/// Existence check used for the input file.
pub trait FileProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Asks the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl<F> FileProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Result of scanning one argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Usage was printed; nothing else should run.
    HelpRequested,
    /// Diagnostic and usage were printed.
    Error(ParamError),
    Ready(Configuration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionTarget {
    ThreadCount,
    Memory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    AwaitingValue(OptionTarget),
}

/// Strings collected by the scan, before validation.
#[derive(Debug, Default)]
struct RawArgs {
    app_name: String,
    input_file: String,
    output_file: String,
    threads: String,
    memory: String,
    verbose: bool,
}

/// Turns a process argument list into a [`Configuration`].
pub struct ParamParser<P = FsProbe> {
    default_max_memory_mb: u64,
    default_thread_count: usize,
    probe: P,
}

impl ParamParser<FsProbe> {
    pub fn new(default_max_memory_mb: u64, default_thread_count: usize) -> Self {
        Self {
            default_max_memory_mb,
            default_thread_count,
            probe: FsProbe,
        }
    }

    /// 1024 MB and one thread per available core, capped at [`MAX_THREADS`].
    pub fn with_system_defaults() -> Self {
        let threads = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .clamp(1, MAX_THREADS);
        Self::new(DEFAULT_MAX_MEMORY_MB, threads)
    }
}

impl<P: FileProbe> ParamParser<P> {
    pub fn with_probe<Q: FileProbe>(self, probe: Q) -> ParamParser<Q> {
        ParamParser {
            default_max_memory_mb: self.default_max_memory_mb,
            default_thread_count: self.default_thread_count,
            probe,
        }
    }

    pub fn usage(&self) -> String {
        usage::render(self.default_max_memory_mb, self.default_thread_count)
    }

    /// Parses `args` (program name first), reporting to standard error.
    pub fn parse_arguments<I, S>(&self, args: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stderr = std::io::stderr();
        let mut lock = stderr.lock();
        self.parse_arguments_to(args, &mut lock)
    }

    /// Same as [`Self::parse_arguments`], writing usage and diagnostics to `diag`.
    pub fn parse_arguments_to<I, S, W>(&self, args: I, diag: &mut W) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        W: Write,
    {
        let raw = match self.scan(args) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.print_usage(diag);
                return ParseOutcome::HelpRequested;
            }
            Err(err) => return self.fail(err, diag),
        };

        match self.validate(raw) {
            Ok(config) => ParseOutcome::Ready(config),
            Err(err) => self.fail(err, diag),
        }
    }

    /// Classifies every token. `Ok(None)` means help was asked for.
    fn scan<I, S>(&self, args: I) -> Result<Option<RawArgs>, ParamError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw = RawArgs::default();
        let mut state = ScanState::Scanning;

        for arg in args {
            let arg = arg.as_ref();

            if let ScanState::AwaitingValue(target) = state {
                // Whatever comes next is the value, even if it looks like a flag.
                match target {
                    OptionTarget::ThreadCount => raw.threads = arg.to_string(),
                    OptionTarget::Memory => raw.memory = arg.to_string(),
                }
                state = ScanState::Scanning;
                continue;
            }

            match arg {
                "-h" | "--help" => return Ok(None),
                "-v" | "--verbose" => raw.verbose = true,
                "-n" => state = ScanState::AwaitingValue(OptionTarget::ThreadCount),
                "-m" => state = ScanState::AwaitingValue(OptionTarget::Memory),
                _ if raw.app_name.is_empty() => raw.app_name = arg.to_string(),
                _ if raw.input_file.is_empty() => raw.input_file = arg.to_string(),
                _ if raw.output_file.is_empty() => raw.output_file = arg.to_string(),
                _ => return Err(ParamError::TooManyArguments(arg.to_string())),
            }
        }

        // A trailing `-n`/`-m` never receives a value and is dropped.
        Ok(Some(raw))
    }

    fn validate(&self, raw: RawArgs) -> Result<Configuration, ParamError> {
        let mut thread_count = self.default_thread_count;
        if !raw.threads.is_empty() {
            thread_count = match parse_int(&raw.threads) {
                Some(n) if (1..=MAX_THREADS as i32).contains(&n) => n as usize,
                _ => return Err(ParamError::InvalidThreadCount(raw.threads)),
            };
        }

        let mut max_memory_mb = self.default_max_memory_mb;
        if !raw.memory.is_empty() {
            max_memory_mb = match parse_int(&raw.memory) {
                Some(m) if m >= 1 => m as u64,
                _ => return Err(ParamError::InvalidMemory(raw.memory)),
            };
        }

        if raw.input_file.is_empty() {
            return Err(ParamError::MissingInputFile);
        }
        if raw.output_file.is_empty() {
            return Err(ParamError::MissingOutputFile);
        }

        let input_file = PathBuf::from(raw.input_file);
        if !self.probe.exists(&input_file) {
            return Err(ParamError::InputFileNotFound(input_file));
        }

        Ok(Configuration {
            max_memory_mb,
            thread_count,
            verbose: raw.verbose,
            input_file,
            output_file: PathBuf::from(raw.output_file),
        })
    }

    fn fail<W: Write>(&self, err: ParamError, diag: &mut W) -> ParseOutcome {
        // Nothing sensible to do if the diagnostic stream itself is broken.
        let _ = writeln!(diag, "{err}");
        self.print_usage(diag);
        ParseOutcome::Error(err)
    }

    fn print_usage<W: Write>(&self, diag: &mut W) {
        let _ = write!(diag, "{}", self.usage());
        let _ = diag.flush();
    }
}

/// 32-bit signed decimal, surrounding whitespace allowed.
fn parse_int(value: &str) -> Option<i32> {
    value.trim().parse().ok()
}
