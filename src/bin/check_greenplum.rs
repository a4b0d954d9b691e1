use check_greenplum::cli;

#[tokio::main]
async fn main() {
    let code = cli::start().await;
    std::process::exit(code);
}
