use clap::Parser;
use scoreboard::cli::{run, Cli};
use scoreboard::config::runtime::RuntimeSettings;
use scoreboard::db::txn_policy::{set_txn_policy, TxnPolicy};

mod telemetry;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let runtime = match RuntimeSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("error [{}]: {}", e.code(), e.detail());
            std::process::exit(2);
        }
    };
    telemetry::init_tracing(runtime.log_json);

    set_txn_policy(if cli.dry_run {
        TxnPolicy::RollbackOnOk
    } else {
        runtime.txn_policy
    });

    match run(cli).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("error [{}]: {}", e.code(), e.detail());
            std::process::exit(1);
        }
    }
}
