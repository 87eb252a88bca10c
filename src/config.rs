use serde::Serialize;
use std::path::PathBuf;

/// Upper bound accepted for `-n`.
pub const MAX_THREADS: usize = 32;

/// Memory budget used when the caller has no better default.
pub const DEFAULT_MAX_MEMORY_MB: u64 = 1024;

/// Validated parameters for a histogram run.
///
/// Only produced by a successful parse, after which it is handed off by value
/// and never mutated again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// Memory budget in megabytes, at least 1.
    pub max_memory_mb: u64,
    /// Worker count, in `[1, MAX_THREADS]`.
    pub thread_count: usize,
    pub verbose: bool,
    /// Existing file to read from.
    pub input_file: PathBuf,
    /// Destination path. Whether it can be written is left to the writer.
    pub output_file: PathBuf,
}

impl Configuration {
    pub fn max_memory_bytes(&self) -> u64 {
        self.max_memory_mb.saturating_mul(1024 * 1024)
    }

    /// Builds a dedicated rayon pool with exactly `thread_count` workers.
    pub fn build_thread_pool(&self) -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.thread_count)
            .thread_name(|i| format!("hystogram-worker-{i}"))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Configuration {
        Configuration {
            max_memory_mb: 512,
            thread_count: 3,
            verbose: true,
            input_file: PathBuf::from("in.bin"),
            output_file: PathBuf::from("out.bin"),
        }
    }

    #[test]
    fn memory_budget_in_bytes() {
        assert_eq!(sample().max_memory_bytes(), 512 * 1024 * 1024);
    }

    #[test]
    fn memory_budget_saturates() {
        let config = Configuration {
            max_memory_mb: u64::MAX,
            ..sample()
        };
        assert_eq!(config.max_memory_bytes(), u64::MAX);
    }

    #[test]
    fn thread_pool_matches_thread_count() {
        let pool = sample().build_thread_pool().unwrap();
        assert_eq!(pool.current_num_threads(), 3);
        assert_eq!(pool.install(rayon::current_num_threads), 3);
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["max_memory_mb"], 512);
        assert_eq!(json["thread_count"], 3);
        assert_eq!(json["verbose"], true);
        assert_eq!(json["input_file"], "in.bin");
        assert_eq!(json["output_file"], "out.bin");
    }
}
