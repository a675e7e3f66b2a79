use preco_scout::config::{AppConfig, load_config};
use preco_scout::format::render_result;
use preco_scout::model::{Condition, QueryInput, RequestState};
use preco_scout::PriceQueryClient;

use std::process::ExitCode;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let input = match parse_args(std::env::args().skip(1)) {
        Ok(input) => input,
        Err(usage) => {
            eprintln!("{usage}");
            return ExitCode::FAILURE;
        }
    };

    // Load configuration from file; fall back to the built-in endpoint.
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load failed ({}), using default endpoint", e);
            AppConfig::default()
        }
    };
    info!("Using pricing service at {}", config.api_url);

    let client = PriceQueryClient::new(config.api_url);
    match client.submit_query(&input).await {
        RequestState::Succeeded(result) => {
            println!("{}", render_result(&result));
            ExitCode::SUCCESS
        }
        RequestState::Failed(e) => {
            error!("Query failed: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
        // submit_query only resolves to Succeeded or Failed.
        other => {
            error!("Unexpected state: {:?}", other);
            ExitCode::FAILURE
        }
    }
}

/// `preco-scout <product name...> [--estado <novo|excelente|bom|defeito>]`
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<QueryInput, String> {
    const USAGE: &str =
        "usage: preco-scout <product name...> [--estado <novo|excelente|bom|defeito>]";

    let mut name_parts: Vec<String> = Vec::new();
    let mut condition = Condition::default();

    while let Some(arg) = args.next() {
        if arg == "--estado" || arg == "--condition" {
            let value = args.next().ok_or_else(|| USAGE.to_string())?;
            condition = value.parse().map_err(|e| format!("{e}\n{USAGE}"))?;
        } else {
            name_parts.push(arg);
        }
    }

    if name_parts.is_empty() {
        return Err(USAGE.to_string());
    }

    Ok(QueryInput::new(name_parts.join(" ")).with_condition(condition))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(parts: &[&str]) -> Result<QueryInput, String> {
        parse_args(parts.iter().map(|s| s.to_string()))
    }

    #[test]
    fn joins_name_parts_and_defaults_condition() {
        let input = parse(&["iPhone", "13", "128gb"]).unwrap();
        assert_eq!(input.product_name, "iPhone 13 128gb");
        assert_eq!(input.condition, Condition::Good);
    }

    #[test]
    fn estado_flag_selects_condition() {
        let input = parse(&["PS5", "--estado", "novo"]).unwrap();
        assert_eq!(input.condition, Condition::New);

        let input = parse(&["--condition", "defective", "PS5"]).unwrap();
        assert_eq!(input.product_name, "PS5");
        assert_eq!(input.condition, Condition::Defective);
    }

    #[test]
    fn rejects_empty_or_malformed_invocations() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["PS5", "--estado"]).is_err());
        assert!(parse(&["PS5", "--estado", "mint"]).is_err());
    }
}
