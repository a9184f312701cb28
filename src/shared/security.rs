use crate::shared::error::RigError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a rig, catalog or config file (10 MB)
pub const MAX_INPUT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if:
/// - The metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| RigError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(RigError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Symbolic links are not followed; pass the real file path".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_INPUT_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(RigError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the catalog into smaller files".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Reads a file as UTF-8 after the regular-file and size checks
pub fn read_checked(path: &Path, file_description: &str) -> Result<String> {
    validate_regular_file(path, file_description)?;
    fs::read_to_string(path).map_err(|e| {
        RigError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
