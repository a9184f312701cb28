use crate::hardware_analysis::domain::{CatalogEntry, Rig};
use crate::ports::outbound::{GameCatalogReader, RigReader};
use crate::shared::error::RigError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Document syntax, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DocumentFormat {
    Yaml,
    Json,
    Toml,
}

impl DocumentFormat {
    /// YAML is the fallback since it also accepts plain JSON
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => DocumentFormat::Json,
            Some("toml") => DocumentFormat::Toml,
            _ => DocumentFormat::Yaml,
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> std::result::Result<T, String> {
        match self {
            DocumentFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// A catalog is either a bare list of entries or a table with a `games` key
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Keyed { games: Vec<CatalogEntry> },
    List(Vec<CatalogEntry>),
}

impl CatalogDocument {
    fn into_entries(self) -> Vec<CatalogEntry> {
        match self {
            CatalogDocument::Keyed { games } | CatalogDocument::List(games) => games,
        }
    }
}

/// FileSystemReader adapter for reading rigs and catalogs from disk
///
/// Implements both RigReader and GameCatalogReader. YAML, JSON and TOML
/// documents are accepted.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RigReader for FileSystemReader {
    fn read_rig(&self, path: &Path) -> Result<Rig> {
        if !path.exists() {
            return Err(RigError::RigFileNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass the path of a rig file (YAML, JSON or TOML) with --rig"
                    .to_string(),
            }
            .into());
        }

        let content = read_checked(path, "rig file")?;
        let rig: Rig = DocumentFormat::from_path(path)
            .parse(&content)
            .map_err(|details| RigError::RigParseError {
                path: path.to_path_buf(),
                details,
            })?;
        rig.validate()?;

        debug!(path = %path.display(), extras = rig.extras.len(), "rig loaded");
        Ok(rig)
    }
}

impl GameCatalogReader for FileSystemReader {
    fn read_catalog(&self, path: &Path) -> Result<Vec<CatalogEntry>> {
        if !path.exists() {
            return Err(RigError::CatalogNotFound {
                path: path.to_path_buf(),
                suggestion: "Pass the path of a game catalog with --catalog".to_string(),
            }
            .into());
        }

        let content = read_checked(path, "game catalog")?;
        let document: CatalogDocument = DocumentFormat::from_path(path)
            .parse(&content)
            .map_err(|details| RigError::CatalogParseError {
                path: path.to_path_buf(),
                details,
            })?;

        let entries = document.into_entries();
        debug!(path = %path.display(), games = entries.len(), "catalog loaded");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware_analysis::domain::ComponentKind;
    use std::fs;
    use tempfile::TempDir;

    const RIG_YAML: &str = r#"
cpu: { kind: CPU, brand: AMD, model: Ryzen 5 5600X, benchmark_score: 11000 }
gpu: { kind: GPU, brand: NVIDIA, model: RTX 3060, benchmark_score: 12000 }
ram: { kind: RAM, brand: Corsair, model: Vengeance, spec_text: "16 GB DDR4" }
extras:
  - { kind: Motherboard, brand: ASUS, model: B550-F }
"#;

    #[test]
    fn test_read_rig_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rig.yml");
        fs::write(&path, RIG_YAML).unwrap();

        let rig = FileSystemReader::new().read_rig(&path).unwrap();
        assert_eq!(rig.cpu.effective_score(), 11000);
        assert_eq!(rig.ram.ram_capacity_gb(), 16);
        assert_eq!(rig.extras[0].kind(), ComponentKind::Motherboard);
    }

    #[test]
    fn test_read_rig_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rig.toml");
        fs::write(
            &path,
            r#"
[cpu]
kind = "CPU"
brand = "Intel"
model = "Core i5-12400"
benchmark_score = 9000

[gpu]
kind = "GPU"
brand = "AMD"
model = "RX 6600"
benchmark_score = 10000

[ram]
kind = "RAM"
brand = "Kingston"
model = "Fury"
spec_text = "32 GB"
"#,
        )
        .unwrap();

        let rig = FileSystemReader::new().read_rig(&path).unwrap();
        assert_eq!(rig.gpu.label(), "AMD RX 6600");
        assert_eq!(rig.ram.ram_capacity_gb(), 32);
    }

    #[test]
    fn test_read_rig_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_rig(&temp_dir.path().join("missing.yml"));

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Rig file not found"));
    }

    #[test]
    fn test_read_rig_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rig.json");
        fs::write(&path, "{ \"cpu\": ").unwrap();

        let err_string = format!("{}", FileSystemReader::new().read_rig(&path).unwrap_err());
        assert!(err_string.contains("Failed to parse rig file"));
    }

    #[test]
    fn test_read_rig_rejects_wrong_slot_kind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rig.yml");
        fs::write(&path, RIG_YAML.replace("kind: RAM", "kind: GPU")).unwrap();

        let err_string = format!("{}", FileSystemReader::new().read_rig(&path).unwrap_err());
        assert!(err_string.contains("Invalid ram component"));
    }

    #[test]
    fn test_read_catalog_list_and_keyed_forms() {
        let temp_dir = TempDir::new().unwrap();
        let list = temp_dir.path().join("list.json");
        fs::write(
            &list,
            r#"[{"game": {"id": 1, "name": "Portal 2"}},
                {"game": {"id": 2, "name": "Cyberpunk 2077"},
                 "requirements": {
                   "minimum": {"cpu_score": 6000, "gpu_score": 5000, "ram_gb": 8},
                   "recommended": {"cpu_score": 9000, "gpu_score": 10000, "ram_gb": 12},
                   "ultra": {"cpu_score": 12000, "gpu_score": 16000, "ram_gb": 16},
                   "requires_ssd": true}}]"#,
        )
        .unwrap();
        let keyed = temp_dir.path().join("games.yml");
        fs::write(
            &keyed,
            "games:\n  - game: { id: 7, name: Hades }\n",
        )
        .unwrap();

        let reader = FileSystemReader::new();
        let entries = reader.read_catalog(&list).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].requirements.is_none());
        let requirements = entries[1].requirements.as_ref().unwrap();
        assert!(requirements.requires_ssd);
        assert_eq!(requirements.storage_gb, 50);

        let entries = reader.read_catalog(&keyed).unwrap();
        assert_eq!(entries[0].game.name, "Hades");
    }

    #[test]
    fn test_read_catalog_not_found_and_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let reader = FileSystemReader::new();

        let missing = reader.read_catalog(&temp_dir.path().join("none.yml"));
        assert!(format!("{}", missing.unwrap_err()).contains("Game catalog not found"));

        let path = temp_dir.path().join("games.yml");
        fs::write(&path, "games: 12").unwrap();
        let invalid = reader.read_catalog(&path);
        assert!(format!("{}", invalid.unwrap_err()).contains("Failed to parse game catalog"));
    }

    #[test]
    fn test_document_format_from_path() {
        assert_eq!(DocumentFormat::from_path(Path::new("a.JSON")), DocumentFormat::Json);
        assert_eq!(DocumentFormat::from_path(Path::new("a.toml")), DocumentFormat::Toml);
        assert_eq!(DocumentFormat::from_path(Path::new("a.yaml")), DocumentFormat::Yaml);
        assert_eq!(DocumentFormat::from_path(Path::new("rig")), DocumentFormat::Yaml);
    }
}
