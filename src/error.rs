use std::path::PathBuf;

/// Reason a command line was rejected.
///
/// Every variant is reported together with the usage text, so callers only
/// need to pick an exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// A positional token arrived after both file slots were filled.
    TooManyArguments(String),
    /// `-n` value is not an integer or lies outside `[1, 32]`.
    InvalidThreadCount(String),
    /// `-m` value is not an integer or is below 1.
    InvalidMemory(String),
    MissingInputFile,
    MissingOutputFile,
    InputFileNotFound(PathBuf),
}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyArguments(_) => write!(f, "Too many options"),
            Self::InvalidThreadCount(value) => write!(f, "Invalid thread count ({value})"),
            Self::InvalidMemory(value) => write!(f, "Invalid maximum memory ({value})"),
            Self::MissingInputFile => write!(f, "No input filename"),
            Self::MissingOutputFile => write!(f, "No output file"),
            Self::InputFileNotFound(path) => {
                write!(f, "Input file ({}) doesn't exist", path.display())
            }
        }
    }
}

impl std::error::Error for ParamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_value() {
        let err = ParamError::InvalidThreadCount("abc".to_string());
        assert_eq!(err.to_string(), "Invalid thread count (abc)");

        let err = ParamError::InvalidMemory("-5".to_string());
        assert_eq!(err.to_string(), "Invalid maximum memory (-5)");
    }

    #[test]
    fn display_missing_file_messages() {
        assert_eq!(ParamError::MissingInputFile.to_string(), "No input filename");
        assert_eq!(ParamError::MissingOutputFile.to_string(), "No output file");
    }

    #[test]
    fn display_not_found_names_path() {
        let err = ParamError::InputFileNotFound(PathBuf::from("data/in.bin"));
        assert_eq!(err.to_string(), "Input file (data/in.bin) doesn't exist");
    }

    #[test]
    fn display_too_many_omits_token() {
        let err = ParamError::TooManyArguments("c.bin".to_string());
        assert_eq!(err.to_string(), "Too many options");
    }
}
