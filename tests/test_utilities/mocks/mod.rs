/// Mock implementations for testing
mod mock_catalog_reader;
mod mock_progress_reporter;
mod mock_rig_reader;

pub use mock_catalog_reader::MockCatalogReader;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
pub use mock_rig_reader::MockRigReader;
