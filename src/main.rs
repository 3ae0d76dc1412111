use std::error::Error;
use std::process::ExitCode;

use namefold::{NamefoldConfig, all_passed, run_self_checks, search_with};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_ROSTER: [(&str, &str); 4] = [
    ("José Álvarez", "CSE2025-001"),
    ("Ravi Kumar", "CSE2025-002"),
    ("Arun Nair", "ECE2024-017"),
    ("Ana Lucía Pérez", "MEC2023-005"),
];

fn main() -> Result<ExitCode, Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut json = false;
    let mut config_path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => config_path = Some(arg),
        }
    }

    let config = match config_path {
        Some(path) => {
            let config = NamefoldConfig::from_file(&path)?;
            info!(path = %path, name = ?config.name, "config_loaded");
            config
        }
        None => NamefoldConfig::default(),
    };

    let checks = run_self_checks();
    let passed = all_passed(&checks);

    if json {
        println!("{}", serde_json::to_string_pretty(&checks)?);
    } else {
        for check in &checks {
            println!("{check}");
        }
        println!(
            "{}/{} checks passed",
            checks.iter().filter(|c| c.passed).count(),
            checks.len()
        );

        let match_cfg = config.match_config();
        for query in ["jose", "cse2025-01", "lucia"] {
            let hits = search_with(query, &DEMO_ROSTER, |(name, roll)| [*name, *roll], &match_cfg)?;
            let names: Vec<&str> = hits.iter().map(|(name, _)| *name).collect();
            println!("search {query:?}: {names:?}");
        }
    }

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
