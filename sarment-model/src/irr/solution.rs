/// Indicates how the IRR solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The NPV residual met the configured tolerance.
    Converged,
    /// Reached the iteration limit; the reported rate is the last clamped
    /// Newton iterate.
    MaxIters,
    /// The derivative vanished and no further step could be taken; the
    /// reported rate is the last iterate.
    StalledDerivative,
}

/// The result of an IRR solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// The internal rate of return as an annual fraction.
    ///
    /// Best effort when `status` is not [`Status::Converged`].
    pub rate: f64,
    /// How the solver finished.
    pub status: Status,
    /// Newton iterations performed.
    pub iters: usize,
}
