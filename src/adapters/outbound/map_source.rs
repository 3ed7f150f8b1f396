use crate::common::{DomainError, DomainResult};
use crate::domains::route_map::MapDataSource;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "ROUTE_FINDER_DATA_DIR";

/// Resolve the map data directory.
/// Precedence: explicit dir -> ROUTE_FINDER_DATA_DIR -> ./resources/maps ->
/// /usr/share/route-finder/maps
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if let Ok(v) = env::var(DATA_DIR_ENV) {
        return PathBuf::from(v);
    }
    let cwd_default = Path::new("resources/maps");
    if cwd_default.exists() {
        return cwd_default.to_path_buf();
    }
    PathBuf::from("/usr/share/route-finder/maps")
}

/// Map text files under a base directory. Absolute names bypass the base.
pub struct FilesystemMapSource {
    base: PathBuf,
}

impl FilesystemMapSource {
    pub fn new(base: Option<PathBuf>) -> Self {
        Self {
            base: resolve_data_dir(base),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl MapDataSource for FilesystemMapSource {
    fn load_map_text(&self, name: &str) -> DomainResult<String> {
        let path = self.base.join(name);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DomainError::MapFileNotFound {
                path: path.display().to_string(),
            },
            _ => DomainError::InfrastructureError(format!("{}: {}", path.display(), e)),
        })
    }

    fn list_maps(&self) -> DomainResult<Vec<String>> {
        let entries = match fs::read_dir(&self.base) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DomainError::InfrastructureError(format!("{}", e))),
        };
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DomainError::InfrastructureError(format!("{}", e)))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "txt") {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}
