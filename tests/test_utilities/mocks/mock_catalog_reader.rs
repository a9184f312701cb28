use std::path::Path;
use rigscore::prelude::*;

/// Mock GameCatalogReader for testing
pub struct MockCatalogReader {
    pub entries: Vec<CatalogEntry>,
    pub should_fail: bool,
}

impl MockCatalogReader {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            entries: Vec::new(),
            should_fail: true,
        }
    }
}

impl GameCatalogReader for MockCatalogReader {
    fn read_catalog(&self, _path: &Path) -> Result<Vec<CatalogEntry>> {
        if self.should_fail {
            anyhow::bail!("Mock catalog read failure");
        }
        Ok(self.entries.clone())
    }
}
