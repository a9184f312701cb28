use std::path::Path;
use rigscore::prelude::*;

/// Mock RigReader for testing
pub struct MockRigReader {
    pub rig: Option<Rig>,
}

impl MockRigReader {
    pub fn new(rig: Rig) -> Self {
        Self { rig: Some(rig) }
    }

    pub fn with_failure() -> Self {
        Self { rig: None }
    }
}

impl RigReader for MockRigReader {
    fn read_rig(&self, _path: &Path) -> Result<Rig> {
        match &self.rig {
            Some(rig) => Ok(rig.clone()),
            None => anyhow::bail!("Mock rig read failure"),
        }
    }
}
