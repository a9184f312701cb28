use crate::ports::outbound::OutputPresenter;
use crate::shared::error::RigError;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// FileSystemWriter adapter for writing reports to a file
///
/// Used when `-o/--output` is given. Existing regular files are replaced;
/// symlinks (dangling ones included) and directories are refused.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    fn write_error(&self, details: impl Into<String>) -> anyhow::Error {
        RigError::FileWriteError {
            path: self.output_path.clone(),
            details: details.into(),
        }
        .into()
    }

    fn check_destination(&self) -> Result<()> {
        let parent = self
            .output_path
            .parent()
            .filter(|p| *p != Path::new(""));
        if let Some(parent) = parent {
            if !parent.is_dir() {
                return Err(self.write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        match fs::symlink_metadata(&self.output_path) {
            Ok(metadata) if metadata.is_symlink() => Err(self.write_error(
                "Output path is a symbolic link. Writing through symbolic links is not allowed.",
            )),
            Ok(metadata) if metadata.is_dir() => {
                Err(self.write_error("Output path is a directory"))
            }
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.write_error(format!("Failed to read file metadata: {}", e))),
        }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.check_destination()?;
        fs::write(&self.output_path, content).map_err(|e| self.write_error(e.to_string()))?;

        eprintln!("✅ Report written to: {}", self.output_path.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing output to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
