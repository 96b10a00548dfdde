use std::fmt;

pub const EXIT_ORDERLY: i32 = 0;
pub const EXIT_FORCED: i32 = 1;

/// How a shutdown episode ended. Decides the process exit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// The application stopped within the grace period.
    Orderly,
    /// The grace period elapsed before the application stopped.
    TimedOut,
    /// The application reported a stop failure before the grace period elapsed.
    StopFailed(String),
}

impl ShutdownOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            ShutdownOutcome::Orderly => EXIT_ORDERLY,
            ShutdownOutcome::TimedOut | ShutdownOutcome::StopFailed(_) => EXIT_FORCED,
        }
    }
}

impl fmt::Display for ShutdownOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownOutcome::Orderly => f.write_str("orderly"),
            ShutdownOutcome::TimedOut => f.write_str("forced: grace period elapsed"),
            ShutdownOutcome::StopFailed(cause) => write!(f, "forced: stop failed: {cause}"),
        }
    }
}

#[cfg(test)]
mod shutdown_outcome_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ShutdownOutcome::Orderly, EXIT_ORDERLY)]
    #[case(ShutdownOutcome::TimedOut, EXIT_FORCED)]
    #[case(ShutdownOutcome::StopFailed("db pool busy".into()), EXIT_FORCED)]
    fn it_should_map_each_outcome_to_an_exit_code(
        #[case] outcome: ShutdownOutcome,
        #[case] code: i32,
    ) {
        assert_eq!(outcome.exit_code(), code);
    }

    #[test]
    fn it_should_include_the_failure_cause_when_displayed() {
        let outcome = ShutdownOutcome::StopFailed("db pool busy".into());
        assert_eq!(outcome.to_string(), "forced: stop failed: db pool busy");
    }
}
