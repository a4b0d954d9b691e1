use crate::{
    check::{CheckConfig, CheckMode},
    cli::actions::Action,
};
use anyhow::{Context, Result, ensure};
use clap::ArgMatches;

/// Pick the check mode from the mutually exclusive flags and pull in its
/// mode-specific options. Connect test is the default when no flag is given.
fn selected_mode(matches: &ArgMatches) -> Result<CheckMode> {
    if matches.get_flag("do-select-test") {
        let schema = matches
            .get_one::<String>("select-schema")
            .context("--select-schema is required with --do-select-test")?;
        let table = matches
            .get_one::<String>("select-table")
            .context("--select-table is required with --do-select-test")?;
        Ok(CheckMode::Select {
            schema: schema.clone(),
            table: table.clone(),
        })
    } else if matches.get_flag("do-create-test") {
        let table = matches
            .get_one::<String>("create-table")
            .context("--create-table is required with --do-create-test")?;
        Ok(CheckMode::CreateTemp {
            table: table.clone(),
        })
    } else if matches.get_flag("do-3x-all-segments-valid") {
        Ok(CheckMode::SegmentsV3)
    } else if matches.get_flag("do-4x-all-segments-valid") {
        Ok(CheckMode::SegmentsV4)
    } else if matches.get_flag("do-check-long-running-queries") {
        let warn_minutes = matches
            .get_one::<u64>("long-running-warn")
            .copied()
            .context("--long-running-warn is required with --do-check-long-running-queries")?;
        let crit_minutes = matches
            .get_one::<u64>("long-running-crit")
            .copied()
            .context("--long-running-crit is required with --do-check-long-running-queries")?;
        ensure!(
            warn_minutes <= crit_minutes,
            "--long-running-warn ({warn_minutes}) must not exceed --long-running-crit ({crit_minutes})"
        );
        Ok(CheckMode::LongRunning {
            warn_minutes,
            crit_minutes,
        })
    } else {
        Ok(CheckMode::Connect)
    }
}

/// Convert `ArgMatches` into a typed Action with validation
///
/// # Errors
///
/// Returns an error when the database name is missing, when the selected
/// check lacks one of its mandatory options, or when the long-running
/// thresholds are inverted
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    let database = matches
        .get_one::<String>("db")
        .cloned()
        .context("-D/--db is required")?;

    let host = matches
        .get_one::<String>("dbhost")
        .cloned()
        .unwrap_or_else(|| String::from("localhost"));

    let port = matches.get_one::<u16>("port").copied().unwrap_or(5432);
    let timeout_secs = matches.get_one::<u64>("timeout").copied().unwrap_or(300);
    let username = matches.get_one::<String>("username").cloned();
    let password = matches.get_one::<String>("password").cloned();
    let debug = matches.get_flag("debug");

    let mode = selected_mode(matches)?;

    Ok(Action::Check {
        config: CheckConfig {
            host,
            port,
            database,
            username,
            password,
            timeout_secs,
            mode,
            debug,
        },
    })
}
