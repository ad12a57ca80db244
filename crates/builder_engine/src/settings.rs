use std::time::Duration;

/// Cadence of the progress machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSettings {
    /// Spacing between consecutive ticks; tick `k` fires at `k * tick_interval`
    /// after the session is scheduled.
    pub tick_interval: Duration,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(3000),
        }
    }
}

impl ProgressSettings {
    pub fn with_interval(tick_interval: Duration) -> Self {
        Self { tick_interval }
    }

    /// Offsets from scheduling time for `count` ticks, strictly increasing
    /// as long as the interval is non-zero.
    pub fn offsets(&self, count: usize) -> Vec<Duration> {
        (1..=count)
            .map(|k| self.tick_interval.saturating_mul(k as u32))
            .collect()
    }
}
