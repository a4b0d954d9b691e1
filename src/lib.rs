//! Monitoring plugin for Greenplum clusters: runs one diagnostic against the
//! master, prints one status line and exits with the standard plugin codes
//! (0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN).

pub mod check;
pub mod cli;
