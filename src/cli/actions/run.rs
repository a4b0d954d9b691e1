use super::Action;
use crate::check::{CheckResult, postgres};

/// Execute the action's business logic by delegating to the check module
pub async fn execute(action: Action) -> CheckResult {
    match action {
        Action::Check { config } => postgres::run(&config).await,
    }
}
