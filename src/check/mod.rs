pub mod postgres;

use std::fmt;
use std::time::Duration;

/// Service name prefixed to every status line
pub const SERVICE: &str = "GPDB";

/// Standard monitoring-plugin severities, ordered by badness
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
    Dependent,
}

impl Severity {
    /// Process exit code understood by the monitoring host
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
            Self::Dependent => 4,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
            Self::Dependent => "DEPENDENT",
        };
        write!(f, "{name}")
    }
}

/// Outcome of a single check run, consumed once by the reporting step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub severity: Severity,
    pub message: String,
}

impl CheckResult {
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Ok,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Unknown,
            message: message.into(),
        }
    }

    /// One-line status for stdout: `GPDB <SEVERITY> - <detail>`
    #[must_use]
    pub fn status_line(&self) -> String {
        format!("{SERVICE} {} - {}", self.severity, self.message)
    }
}

/// Which diagnostic to run, with its mode-specific parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckMode {
    Connect,
    Select { schema: String, table: String },
    CreateTemp { table: String },
    SegmentsV3,
    SegmentsV4,
    LongRunning { warn_minutes: u64, crit_minutes: u64 },
}

/// Validated inputs for one invocation, immutable after dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout_secs: u64,
    pub mode: CheckMode,
    pub debug: bool,
}

impl CheckConfig {
    #[must_use]
    pub const fn deadline(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Decision table for the long-running check.
///
/// Warning boundary is exclusive, critical boundary inclusive:
/// `age < warn` is OK, `warn <= age < crit` is WARNING, `age >= crit`
/// is CRITICAL.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn long_running_severity(age_minutes: f64, warn_minutes: u64, crit_minutes: u64) -> Severity {
    if age_minutes >= crit_minutes as f64 {
        Severity::Critical
    } else if age_minutes >= warn_minutes as f64 {
        Severity::Warning
    } else {
        Severity::Ok
    }
}

/// Decision table for both segment checks: any offline segment is critical
#[must_use]
pub fn segments_result(down: i64, all_up_message: &str) -> CheckResult {
    if down == 0 {
        CheckResult::ok(all_up_message)
    } else {
        CheckResult::critical(format!("{down} segment(s) down"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Severity::Ok.exit_code(), 0);
        assert_eq!(Severity::Warning.exit_code(), 1);
        assert_eq!(Severity::Critical.exit_code(), 2);
        assert_eq!(Severity::Unknown.exit_code(), 3);
        assert_eq!(Severity::Dependent.exit_code(), 4);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Ok < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
        assert_eq!(
            std::cmp::max(Severity::Warning, Severity::Critical),
            Severity::Critical
        );
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Ok.to_string(), "OK");
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
        assert_eq!(Severity::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_status_line_format() {
        let result = CheckResult::ok("connection established in 0.042s");
        assert_eq!(
            result.status_line(),
            "GPDB OK - connection established in 0.042s"
        );

        let result = CheckResult::critical("3 segment(s) down");
        assert_eq!(result.status_line(), "GPDB CRITICAL - 3 segment(s) down");
    }

    #[test]
    fn test_long_running_below_warn_is_ok() {
        assert_eq!(long_running_severity(4.9, 5, 10), Severity::Ok);
        assert_eq!(long_running_severity(0.0, 5, 10), Severity::Ok);
    }

    #[test]
    fn test_long_running_warn_boundary_is_warning() {
        // a == warn must already warn
        assert_eq!(long_running_severity(5.0, 5, 10), Severity::Warning);
        assert_eq!(long_running_severity(9.9, 5, 10), Severity::Warning);
    }

    #[test]
    fn test_long_running_crit_boundary_is_critical() {
        // a == crit must already be critical
        assert_eq!(long_running_severity(10.0, 5, 10), Severity::Critical);
        assert_eq!(long_running_severity(120.0, 5, 10), Severity::Critical);
    }

    #[test]
    fn test_long_running_equal_thresholds() {
        // warn == crit collapses the warning band entirely
        assert_eq!(long_running_severity(5.0, 5, 5), Severity::Critical);
        assert_eq!(long_running_severity(4.9, 5, 5), Severity::Ok);
    }

    #[test]
    fn test_segments_result_zero_down() {
        let result = segments_result(0, "all segments up");
        assert_eq!(result.severity, Severity::Ok);
        assert_eq!(result.message, "all segments up");
    }

    #[test]
    fn test_segments_result_reports_count() {
        let result = segments_result(3, "all segments up");
        assert_eq!(result.severity, Severity::Critical);
        assert!(result.message.contains('3'));
    }

    #[test]
    fn test_deadline() {
        let config = CheckConfig {
            host: "localhost".to_string(),
            port: 5432,
            database: "gpadmin".to_string(),
            username: None,
            password: None,
            timeout_secs: 300,
            mode: CheckMode::Connect,
            debug: false,
        };
        assert_eq!(config.deadline(), Duration::from_secs(300));
    }
}
