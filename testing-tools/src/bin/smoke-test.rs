use colored::*;
use log::*;
use service::{config::Config, config::TestMode, logging::Logger};
use testing_tools::output::{all_passed, print_skipped, print_test_summary, run_scenario};
use testing_tools::scenarios;

#[tokio::main]
async fn main() {
    let config = Config::new();
    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to start logger: {e}");
    }

    println!("{}", "Running Boooply SDK smoke tests".bright_white().bold());
    println!("Test mode: {}", config.test_mode.to_string().to_uppercase());
    debug!("Base URL: {}", config.base_url());

    let mut results = vec![run_scenario("connection", scenarios::test_connection(&config)).await];

    match config.test_mode {
        TestMode::Organization => {
            results.push(run_scenario("client_init", scenarios::test_client_init(&config)).await);
            results.push(
                run_scenario(
                    "create_ai_interview",
                    scenarios::test_create_ai_interview(&config),
                )
                .await,
            );
            results.push(
                run_scenario(
                    "add_participant",
                    scenarios::test_add_participant(&config),
                )
                .await,
            );
            results.push(
                run_scenario("list_features", scenarios::test_list_features(&config)).await,
            );
            print_skipped("platform tests", "platform");
        }
        TestMode::Platform => {
            print_skipped("organization tests", "organization");
            results.push(
                run_scenario("create_api_key", scenarios::test_create_api_key(&config)).await,
            );
        }
    }

    print_test_summary(&results);

    if !all_passed(&results) {
        std::process::exit(1);
    }
}
