use crate::hardware_analysis::domain::Rig;
use crate::shared::Result;
use std::path::Path;

/// RigReader port for loading the user's hardware
pub trait RigReader {
    /// Reads and validates a rig description
    ///
    /// # Errors
    /// Returns an error if:
    /// - The rig file does not exist or cannot be read
    /// - The content cannot be parsed
    /// - A core slot holds the wrong kind of component
    fn read_rig(&self, path: &Path) -> Result<Rig>;
}
