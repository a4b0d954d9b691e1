#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use check_greenplum::check::{CheckConfig, CheckMode};
use std::env;

pub const GREENPLUM_HOST: &str = "localhost";
pub const GREENPLUM_PORT: u16 = 5432;
pub const GREENPLUM_DB: &str = "gpadmin";
pub const GREENPLUM_USER: &str = "gpadmin";
pub const GREENPLUM_PASSWORD: &str = "secret";

pub fn skip_if_no_greenplum() -> bool {
    env::var("SKIP_GREENPLUM_TESTS").is_ok()
}

pub fn live_config(mode: CheckMode) -> CheckConfig {
    CheckConfig {
        host: String::from(GREENPLUM_HOST),
        port: GREENPLUM_PORT,
        database: String::from(GREENPLUM_DB),
        username: Some(String::from(GREENPLUM_USER)),
        password: Some(String::from(GREENPLUM_PASSWORD)),
        timeout_secs: 30,
        mode,
        debug: false,
    }
}
