use crate::hardware_analysis::domain::CatalogEntry;
use crate::shared::Result;
use std::path::Path;

/// GameCatalogReader port for loading the game catalog
///
/// This port abstracts where catalog records come from. The analysis core
/// only ever sees the parsed entries.
pub trait GameCatalogReader {
    /// Reads every catalog entry from the given source
    ///
    /// # Arguments
    /// * `path` - Location of the catalog
    ///
    /// # Returns
    /// The catalog entries in source order. Entries without structured
    /// requirements are returned as-is.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalog does not exist or cannot be read
    /// - The content cannot be parsed as a catalog
    fn read_catalog(&self, path: &Path) -> Result<Vec<CatalogEntry>>;
}
