use thiserror::Error;

/// Contract violations detectable before any geometry is computed.
///
/// Everything else (unknown dependency ids, zero-size boxes, empty
/// inputs) degrades to a best-effort geometric result instead of
/// erroring, because a diagram that renders imperfectly is more useful
/// to an interactive editor than one that renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Two tree nodes share an identifier, which would make output map
    /// keys collide and silently drop one node's placement.
    #[error("duplicate node identifier: {0}")]
    DuplicateNodeId(String),
    /// Two schedule tasks share an identifier, which would make
    /// dependency resolution ambiguous.
    #[error("duplicate task identifier: {0}")]
    DuplicateTaskId(String),
}
