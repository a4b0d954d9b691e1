use clap::{
    Arg, ArgAction, ArgGroup, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Pure clap command definitions with zero business logic
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("do-connect-test")
                .help("connect to the master and disconnect (default check)")
                .long("do-connect-test")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("do-select-test")
                .help("run a per-segment group by against --select-schema/--select-table")
                .long("do-select-test")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("do-create-test")
                .help("create a distributed temp table named by --create-table")
                .long("do-create-test")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("do-3x-all-segments-valid")
                .help("check gp_configuration (3.x) for invalid segments")
                .long("do-3x-all-segments-valid")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("do-4x-all-segments-valid")
                .help("check gp_segment_configuration (4.x) for segments not up")
                .long("do-4x-all-segments-valid")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("do-check-long-running-queries")
                .help("alert on the longest running query, thresholds in minutes")
                .long("do-check-long-running-queries")
                .action(ArgAction::SetTrue),
        )
        .group(
            ArgGroup::new("mode")
                .args([
                    "do-connect-test",
                    "do-select-test",
                    "do-create-test",
                    "do-3x-all-segments-valid",
                    "do-4x-all-segments-valid",
                    "do-check-long-running-queries",
                ])
                .multiple(false),
        )
        .arg(
            Arg::new("timeout")
                .default_value("300")
                .help("overall deadline in seconds for connect plus query")
                .long("timeout")
                .short('t')
                .value_name("SECONDS")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("username")
                .help("database user")
                .long("username")
                .short('U'),
        )
        .arg(
            Arg::new("password")
                .help("database password")
                .long("password")
                .short('P'),
        )
        .arg(
            Arg::new("dbhost")
                .default_value("localhost")
                .help("master host to connect to")
                .long("dbhost")
                .short('H'),
        )
        .arg(
            Arg::new("port")
                .default_value("5432")
                .help("master port")
                .long("port")
                .short('p')
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("db")
                .help("database name (required for every check)")
                .long("db")
                .short('D'),
        )
        .arg(
            Arg::new("select-schema")
                .help("schema for the select test")
                .long("select-schema")
                .value_name("SCHEMA"),
        )
        .arg(
            Arg::new("select-table")
                .help("table for the select test")
                .long("select-table")
                .value_name("TABLE"),
        )
        .arg(
            Arg::new("create-table")
                .help("temp table name for the create test")
                .long("create-table")
                .value_name("TABLE"),
        )
        .arg(
            Arg::new("long-running-warn")
                .help("minutes before a running query warns")
                .long("long-running-warn")
                .value_name("MINUTES")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("long-running-crit")
                .help("minutes before a running query is critical")
                .long("long-running-crit")
                .value_name("MINUTES")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("debug")
                .help("print timestamped progress to stderr")
                .long("debug")
                .short('d')
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("compat-exit-ok")
                .help("exit 0 instead of 3 when required options for the selected check are missing (legacy behavior)")
                .long("compat-exit-ok")
                .action(ArgAction::SetTrue),
        )
}
