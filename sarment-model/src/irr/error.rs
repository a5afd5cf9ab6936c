use thiserror::Error;

/// Errors that can occur when setting up an IRR solve.
///
/// Failing to converge is not an error: the solver reports a best-effort
/// rate with a [`Status`](super::Status) describing how it finished.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("problem contains non-finite {name}: {value}")]
    NonFiniteProblem { name: &'static str, value: f64 },
}
