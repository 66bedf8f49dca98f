use colored::*;
use std::future::Future;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct TestResult {
    pub scenario: String,
    pub passed: bool,
    pub message: Option<String>,
    pub duration: Duration,
}

/// Runs one scenario and records its outcome. An `Err` fails the scenario
/// with the error chain as the message.
pub async fn run_scenario<F>(scenario: &str, test: F) -> TestResult
where
    F: Future<Output = anyhow::Result<()>>,
{
    println!("\n{}", format!("=== TEST: {} ===", scenario).bright_cyan().bold());
    let start = Instant::now();

    let outcome = test.await;
    let duration = start.elapsed();

    match outcome {
        Ok(()) => {
            println!("{} {}", "✓".green(), scenario);
            TestResult {
                scenario: scenario.to_string(),
                passed: true,
                message: None,
                duration,
            }
        }
        Err(e) => {
            println!("{} {}: {:#}", "✗".red(), scenario, e);
            TestResult {
                scenario: scenario.to_string(),
                passed: false,
                message: Some(format!("{:#}", e)),
                duration,
            }
        }
    }
}

pub fn print_skipped(group: &str, required_mode: &str) {
    println!(
        "\n{} Skipping {} (requires {} mode)",
        "⏭".yellow(),
        group,
        required_mode
    );
}

pub fn print_test_summary(results: &[TestResult]) {
    println!("\n{}", "=== TEST SUMMARY ===".bright_white().bold());

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = total - passed;

    for result in results {
        let status = if result.passed {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };

        println!("[{}] {} ({:?})", status, result.scenario, result.duration);

        if let Some(msg) = &result.message {
            println!("      {}", msg.dimmed());
        }
    }

    println!(
        "\n{}: {} passed, {} failed",
        "Results".bold(),
        passed.to_string().green(),
        failed.to_string().red()
    );
}

pub fn all_passed(results: &[TestResult]) -> bool {
    results.iter().all(|r| r.passed)
}
