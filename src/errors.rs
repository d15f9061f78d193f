/// Represents the error types that can occur in the core engine.
/// Used by board navigation helpers; parsing and I/O layers report richer
/// diagnostics as `Result<_, String>` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Errors {
    /// Indicates an attempted access outside the bounds of the board.
    OutOfBounds,
}
