//! UI error types.

/// Why a visibility observation could not be set up.
///
/// Callers treat every variant the same way: the target is considered
/// visible immediately.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ObserveError {
    #[error("visibility observation is not supported by this host")]
    Unsupported,

    #[error("observe target tag is empty")]
    EmptyTarget,

    #[error("invalid threshold {0}; expected 0.0..=1.0")]
    InvalidThreshold(String),
}

/// Errors raised while laying out a view tree.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout engine error: {0}")]
    Taffy(#[from] taffy::TaffyError),

    #[error("view {0} has no layout node")]
    MissingNode(u64),
}
