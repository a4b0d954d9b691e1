use super::{commands, dispatch};
use crate::check::Severity;
use clap::error::ErrorKind;

/// Main orchestrator - Pure orchestration with no business logic
///
/// Four-step data flow:
/// 1. Parse: Extract CLI arguments
/// 2. Dispatch: Convert `ArgMatches` into a typed Action with validation
/// 3. Execute: Run the selected check
/// 4. Report: Print one status line, return one exit code
///
/// Every path through here yields exactly one exit code; config errors
/// print usage and exit UNKNOWN (or OK under `--compat-exit-ok`).
pub async fn start() -> i32 {
    let mut cmd = commands::new();

    // 1. Parse
    let matches = match cmd.clone().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            // clap renders help, version and usage errors itself
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => Severity::Unknown.exit_code(),
            };
        }
    };

    let compat_exit_ok = matches.get_flag("compat-exit-ok");

    // 2. Dispatch
    let action = match dispatch::dispatch(&matches) {
        Ok(action) => action,
        Err(err) => {
            eprintln!("{err:#}");
            let _ = cmd.print_help();
            return if compat_exit_ok {
                Severity::Ok.exit_code()
            } else {
                Severity::Unknown.exit_code()
            };
        }
    };

    // 3. Execute
    let result = action.execute().await;

    // 4. Report
    println!("{}", result.status_line());
    result.severity.exit_code()
}
