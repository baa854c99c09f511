use clap::Parser;
use tracing::{error, info};

use nq_matcher::ip_belongs_to_network;
use nq_query::check_rule::{read_check_rules_from_file, run_check_rules};
use nq_query::engine::build_engine;

#[derive(Parser, Debug)]
struct Cli {
    #[clap(short, long)]
    ip: Option<String>,
    #[clap(short, long)]
    network: Option<String>,
    #[clap(short, long)]
    checks_file: Option<String>,
}

#[tokio::main]
async fn main() {
    // Setup logger
    tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .with_ansi(true)
        .init();

    // Parse CLI
    let cli = Cli::parse();

    // Batch mode: run every check rule from the file through the engine
    if let Some(checks_file) = cli.checks_file {
        let rules = match read_check_rules_from_file(&checks_file).await {
            Ok(rules) => rules,
            Err(e) => {
                error!("failed to parse checks file: {}", e);
                std::process::exit(1);
            }
        };
        info!("loaded {} checks from {}", rules.len(), checks_file);

        let engine = build_engine();
        let outcomes = run_check_rules(&engine, &rules);

        let mut failed = 0;
        for outcome in &outcomes {
            match &outcome.result {
                Ok(value) if outcome.passed => info!("{}: {}", outcome.name, value),
                Ok(value) => {
                    error!("{}: got {}, expectation not met", outcome.name, value);
                    failed += 1;
                }
                Err(e) => {
                    error!("{}: {}", outcome.name, e);
                    failed += 1;
                }
            }
        }
        if failed > 0 {
            error!("{}/{} checks failed", failed, outcomes.len());
            std::process::exit(1);
        }
        return;
    }

    // One-shot mode: evaluate a single ip/network pair
    let (ip, network) = match (cli.ip, cli.network) {
        (Some(ip), Some(network)) => (ip, network),
        _ => {
            error!("either --checks-file or both --ip and --network are required");
            std::process::exit(1);
        }
    };

    match ip_belongs_to_network(&ip, &network) {
        Ok(result) => println!("{}", result),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
