use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

/// Factory for creating output presenters
///
/// Reports go to stdout unless an output file was requested.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Picks stdout or a file depending on whether `-o` was given
    pub fn for_output(output: Option<PathBuf>) -> PresenterType {
        match output {
            Some(path) => PresenterType::File(path),
            None => PresenterType::Stdout,
        }
    }

    /// Creates a presenter for the report destination
    ///
    /// # Examples
    /// ```
    /// use rigscore::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
