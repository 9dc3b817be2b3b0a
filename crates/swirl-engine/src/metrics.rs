//! Per-step performance and fault metrics.

/// Timing and fault counts for a single [`FluidGrid::step`](crate::FluidGrid::step).
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Frame number completed by this step (1 for the first step).
    pub frame: u64,
    /// Wall-clock time for the entire step.
    pub total_us: u64,
    /// Time spent in the velocity step (diffuse, project, advect, project).
    pub velocity_us: u64,
    /// Time spent stepping all scalar channels.
    pub scalar_us: u64,
    /// Non-finite cells reset to zero during this step.
    pub faults_reset: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.frame, 0);
        assert_eq!(m.total_us, 0);
        assert_eq!(m.velocity_us, 0);
        assert_eq!(m.scalar_us, 0);
        assert_eq!(m.faults_reset, 0);
    }
}
