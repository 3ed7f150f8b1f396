use crate::common::DomainResult;

/// Port the route map domain depends on for raw map text.
/// Adapters resolve names against a filesystem directory or any other store.
pub trait MapDataSource: Send + Sync {
    /// Raw text of the named map; a missing map is `DomainError::MapFileNotFound`.
    fn load_map_text(&self, name: &str) -> DomainResult<String>;

    /// Names of the maps this source can load, sorted.
    fn list_maps(&self) -> DomainResult<Vec<String>>;
}
