mod run;

use crate::check::{CheckConfig, CheckResult};

/// Action enum representing each possible command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Check { config: CheckConfig },
}

impl Action {
    /// Execute the action, producing exactly one check result
    pub async fn execute(self) -> CheckResult {
        run::execute(self).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::check::CheckMode;

    fn config(mode: CheckMode) -> CheckConfig {
        CheckConfig {
            host: String::from("localhost"),
            port: 5432,
            database: String::from("gpadmin"),
            username: None,
            password: None,
            timeout_secs: 300,
            mode,
            debug: false,
        }
    }

    #[test]
    fn test_action_debug() {
        let action = Action::Check {
            config: config(CheckMode::Connect),
        };
        let debug_str = format!("{action:?}");
        assert!(debug_str.contains("Check"));
        assert!(debug_str.contains("Connect"));
    }

    #[test]
    fn test_action_holds_mode_parameters() {
        let action = Action::Check {
            config: config(CheckMode::LongRunning {
                warn_minutes: 15,
                crit_minutes: 30,
            }),
        };

        match action {
            Action::Check { config } => {
                assert_eq!(
                    config.mode,
                    CheckMode::LongRunning {
                        warn_minutes: 15,
                        crit_minutes: 30,
                    }
                );
            }
        }
    }
}
