use crate::ProgressSessionId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arrange `count` ticks for `session` at the configured cadence.
    ScheduleTicks {
        session: ProgressSessionId,
        count: usize,
    },
    /// Drop every outstanding tick of `session`.
    CancelTicks { session: ProgressSessionId },
}
