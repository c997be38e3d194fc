#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A lookup (or a derivation recipe) named an identifier that was never
    /// declared. Caller bug: a typo, or a stale reference after a UI redesign
    /// removed the identifier. Never retried.
    #[error("unknown identifier name: {0}")]
    UnknownName(String),

    /// Two declarations claimed the same symbolic name. Authoring defect,
    /// raised at construction time only.
    #[error("duplicate identifier name: {0}")]
    DuplicateName(String),
}
