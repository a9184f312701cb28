/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod catalog_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod rig_reader;

pub use catalog_reader::GameCatalogReader;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use rig_reader::RigReader;
