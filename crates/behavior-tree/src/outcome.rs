//! Outcome returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// # Frame-based Semantics
///
/// Evaluation never suspends. `Running` is a plain value: the node reports
/// that its behavior is still in progress, and the agent state it mutated
/// is what carries that progress into the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// The behavior is still in progress (e.g., an attack animation).
    Running,

    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action was started or finished without errors.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be performed this tick.
    Failed,
}

impl Outcome {
    /// Returns `true` if this outcome is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Outcome::Running)
    }

    /// Returns `true` if this outcome is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }

    /// Returns `true` if this outcome is `Failed`.
    #[inline]
    pub fn is_failed(self) -> bool {
        matches!(self, Outcome::Failed)
    }
}
