// src/main.rs

use std::env;
use std::process;

use env_logger::Env;
use log::error;
use num::BigInt;
use serde::Serialize;

use shor::algorithms::FactorizationEngine;
use shor::config::ShorConfig;
use shor::integer_math::narrow::to_machine_int;

#[derive(Serialize)]
struct FactorizationSummary {
    input: String,
    factors: Vec<String>,
    /// Factors narrowed to i64 where every factor fits, absent otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    machine_factors: Option<Vec<i64>>,
    count: usize,
}

fn usage(problem: &str) -> ! {
    eprintln!("error: {}", problem);
    eprintln!("usage: shor <N> [--verbose] [--seed <u64>] [--json]");
    process::exit(2);
}

fn main() {
    let config = ShorConfig::load().unwrap_or_default();

    // Initialize the logger
    let env = Env::default()
        .filter_or("SHOR_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("SHOR_LOG_STYLE", "always");
    env_logger::Builder::from_env(env).init();

    let mut target: Option<String> = None;
    let mut verbose = config.verbose;
    let mut seed = config.seed;
    let mut json = false;

    let args: Vec<String> = env::args().skip(1).collect();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--verbose" | "-v" => verbose = true,
            "--json" => json = true,
            "--seed" => match iter.next().and_then(|value| value.parse::<u64>().ok()) {
                Some(value) => seed = Some(value),
                None => usage("--seed requires an unsigned integer value"),
            },
            value => {
                if target.is_some() {
                    usage(&format!("unexpected argument: {}", value));
                }
                target = Some(value.to_string());
            }
        }
    }

    let text = match target {
        Some(text) => text,
        None => usage("missing the number to factor"),
    };
    let n = match BigInt::parse_bytes(text.as_bytes(), 10) {
        Some(n) => n,
        None => usage(&format!("{} is not a decimal integer", text)),
    };

    let mut engine = match seed {
        Some(seed) => FactorizationEngine::with_seed(seed, verbose),
        None => FactorizationEngine::new(verbose),
    };

    let mut factors = match engine.factorize(&n) {
        Ok(factors) => factors,
        Err(err) => {
            error!("factorization of {} failed: {}", n, err);
            process::exit(1);
        }
    };
    factors.sort();

    if json {
        let machine_factors: Result<Vec<i64>, _> = factors.iter().map(to_machine_int).collect();
        let summary = FactorizationSummary {
            input: n.to_string(),
            factors: factors.iter().map(|f| f.to_string()).collect(),
            machine_factors: machine_factors.ok(),
            count: factors.len(),
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(rendered) => println!("{}", rendered),
            Err(err) => {
                error!("failed to render the JSON summary: {}", err);
                process::exit(1);
            }
        }
    } else {
        let rendered: Vec<String> = factors.iter().map(|f| f.to_string()).collect();
        println!("{} = {}", n, rendered.join(" * "));
    }
}
