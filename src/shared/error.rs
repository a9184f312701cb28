use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI scripts can gate on `IncompatibleHardware` to fail a build-sheet check
/// when the rig cannot run part of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - analysis completed
    Success = 0,
    /// At least one game/component pair is incompatible (compat command only)
    IncompatibleHardware = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable rig or catalog, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::IncompatibleHardware => write!(f, "Incompatible Hardware (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors raised while loading rigs and catalogs or
/// writing reports.
///
/// Scoring itself never fails; these only come from the adapter edges.
#[derive(Debug, Error)]
pub enum RigError {
    #[error("Rig file not found: {path}\n\n💡 Hint: {suggestion}")]
    RigFileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse rig file: {path}\nDetails: {details}\n\n💡 Hint: A rig file needs 'cpu', 'gpu' and 'ram' entries with at least 'brand' and 'model'")]
    RigParseError { path: PathBuf, details: String },

    #[error("Game catalog not found: {path}\n\n💡 Hint: {suggestion}")]
    CatalogNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse game catalog: {path}\nDetails: {details}\n\n💡 Hint: Each catalog entry needs a 'game' with 'id' and 'name'; 'requirements' is optional")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid {slot} component: {reason}\n\n💡 Hint: The '{slot}' entry of a rig file must describe a {slot} part")]
    InvalidComponent { slot: String, reason: String },

    /// Validation error for configuration and builder input
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::IncompatibleHardware.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::IncompatibleHardware),
            "Incompatible Hardware (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_rig_file_not_found_display() {
        let error = RigError::RigFileNotFound {
            path: PathBuf::from("/test/rig.yml"),
            suggestion: "Pass --rig".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Rig file not found"));
        assert!(display.contains("/test/rig.yml"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Pass --rig"));
    }

    #[test]
    fn test_catalog_parse_error_display() {
        let error = RigError::CatalogParseError {
            path: PathBuf::from("/test/games.yml"),
            details: "missing field `name`".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse game catalog"));
        assert!(display.contains("missing field `name`"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_invalid_component_display() {
        let error = RigError::InvalidComponent {
            slot: "cpu".to_string(),
            reason: "declared kind is GPU".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid cpu component"));
        assert!(display.contains("declared kind is GPU"));
    }

    #[test]
    fn test_security_error_display() {
        let error = RigError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("Use a regular file instead"));
    }
}
