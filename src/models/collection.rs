/// What `listCollections` says about a collection name
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionState {
    Missing,
    Present,
    /// Exists but not as a plain collection with default options
    Conflicting(String),
}
