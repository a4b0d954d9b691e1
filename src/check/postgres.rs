use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use sqlx::{ConnectOptions, Connection, postgres::PgConnectOptions};
use std::time::Instant;
use tokio::time::timeout;

use super::{CheckConfig, CheckMode, CheckResult, long_running_severity, segments_result};

// gp_configuration is the 3.x catalog, gp_segment_configuration replaced it
// in 4.x. Status codes are single characters ('u' up, 'd' down).
const SEGMENTS_V3_SQL: &str = "SELECT COUNT(*) FROM gp_configuration WHERE NOT valid";
const SEGMENTS_V4_SQL: &str = "SELECT COUNT(*) FROM gp_segment_configuration WHERE status <> 'u'";

// Idle backends keep the query_start of their last completed statement,
// so only active sessions count. Our own session is always active here,
// which makes a NULL aggregate an unexpected outcome.
const LONG_RUNNING_SQL: &str = "SELECT MAX(EXTRACT(EPOCH FROM (now() - query_start)))::float8 / 60.0 \
     FROM pg_stat_activity WHERE state = 'active'";

/// Run the configured check against the master, bounded by the configured
/// deadline. Always produces exactly one `CheckResult`: timeouts and driver
/// errors map to CRITICAL, anything unmapped to UNKNOWN.
pub async fn run(config: &CheckConfig) -> CheckResult {
    match timeout(config.deadline(), execute(config)).await {
        Ok(Ok(result)) => result,
        Ok(Err(err)) => CheckResult::critical(format!("{err:#}")),
        Err(_) => CheckResult::critical(format!("timeout after {}s", config.timeout_secs)),
    }
}

#[allow(clippy::too_many_lines)]
async fn execute(config: &CheckConfig) -> Result<CheckResult> {
    let started = Instant::now();

    debug(
        config,
        &format!(
            "connecting to {}:{} db={}",
            config.host, config.port, config.database
        ),
    );

    let mut conn = connect_options(config)
        .connect()
        .await
        .context("connection failed")?;

    debug(config, "connected");

    let result = match &config.mode {
        CheckMode::Connect => {
            conn.close().await.context("error closing connection")?;
            CheckResult::ok(format!(
                "connection established in {:.3}s",
                started.elapsed().as_secs_f64()
            ))
        }
        CheckMode::Select { schema, table } => {
            let sql = select_sql(schema, table);
            debug(config, &sql);
            let rows = sqlx::query(&sql)
                .fetch_all(&mut conn)
                .await
                .context("select test failed")?;
            drop(conn);
            CheckResult::ok(format!(
                "select from {schema}.{table} returned {} row(s) in {:.3}s",
                rows.len(),
                started.elapsed().as_secs_f64()
            ))
        }
        CheckMode::CreateTemp { table } => {
            let sql = create_temp_sql(table);
            debug(config, &sql);
            sqlx::query(&sql)
                .execute(&mut conn)
                .await
                .context("create test failed")?;
            drop(conn);
            CheckResult::ok(format!(
                "temp table {table} created in {:.3}s",
                started.elapsed().as_secs_f64()
            ))
        }
        CheckMode::SegmentsV3 => {
            debug(config, SEGMENTS_V3_SQL);
            let down: i64 = sqlx::query_scalar(SEGMENTS_V3_SQL)
                .fetch_one(&mut conn)
                .await
                .context("segment status query failed")?;
            drop(conn);
            segments_result(down, "all segments valid")
        }
        CheckMode::SegmentsV4 => {
            debug(config, SEGMENTS_V4_SQL);
            let down: i64 = sqlx::query_scalar(SEGMENTS_V4_SQL)
                .fetch_one(&mut conn)
                .await
                .context("segment status query failed")?;
            drop(conn);
            segments_result(down, "all segments up")
        }
        CheckMode::LongRunning {
            warn_minutes,
            crit_minutes,
        } => {
            debug(config, LONG_RUNNING_SQL);
            let age: Option<f64> = sqlx::query_scalar(LONG_RUNNING_SQL)
                .fetch_one(&mut conn)
                .await
                .context("activity query failed")?;
            drop(conn);
            age.map_or_else(
                || CheckResult::unknown("query age not reported by pg_stat_activity"),
                |age| CheckResult {
                    severity: long_running_severity(age, *warn_minutes, *crit_minutes),
                    message: format!(
                        "longest running query {age:.1} min (warn {warn_minutes} min, crit {crit_minutes} min)"
                    ),
                },
            )
        }
    };

    Ok(result)
}

fn connect_options(config: &CheckConfig) -> PgConnectOptions {
    let mut options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database);

    if let Some(username) = &config.username {
        options = options.username(username);
    }

    if let Some(password) = &config.password {
        options = options.password(password);
    }

    options
}

// Operator-supplied names go through standard identifier quoting so
// uppercase or otherwise unusual names fail as missing tables, not as
// syntax errors.
fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

fn select_sql(schema: &str, table: &str) -> String {
    format!(
        "SELECT COUNT(1), gp_segment_id FROM {}.{} GROUP BY gp_segment_id",
        quote_ident(schema),
        quote_ident(table)
    )
}

fn create_temp_sql(table: &str) -> String {
    format!(
        "CREATE TEMP TABLE {} (id INT4, val TEXT) DISTRIBUTED BY (id)",
        quote_ident(table)
    )
}

fn debug(config: &CheckConfig, msg: &str) {
    if config.debug {
        eprintln!(
            "{} - {msg}",
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
        );
    }
}
