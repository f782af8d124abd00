/// Error type for the form catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// No built-in form with the given name.
    #[error("unknown form `{name}` (expected one of: {expected})")]
    UnknownForm { name: String, expected: String },
}
