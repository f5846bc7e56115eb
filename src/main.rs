use robot_locator::api::execute_all;
use robot_locator::{init_logging, ConfigurationManager, LocatorService, ServiceConfig};
use serde_json::Value;
use tracing::{error, info};

fn usage(program: &str) -> String {
    format!("Usage: {} <requests.json> [--config <config.json>]", program)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("robot-locator", |s| s.as_str());

    let (requests_path, config_path) = match args.as_slice() {
        [_, requests] => (requests, None),
        [_, requests, flag, config] if flag == "--config" => (requests, Some(config)),
        _ => {
            eprintln!("{}", usage(program));
            return Err("Invalid arguments".into());
        }
    };

    let config = match config_path {
        Some(path) => ConfigurationManager::from_file(path)?.into_config(),
        None => ServiceConfig::default(),
    };
    init_logging(config.log_level);

    let json_data = std::fs::read_to_string(requests_path)?;
    let requests: Vec<Value> = match serde_json::from_str(&json_data) {
        Ok(requests) => requests,
        Err(e) => {
            error!(path = %requests_path, error = %e, "request file is not a JSON array");
            return Err(e.into());
        }
    };
    info!(count = requests.len(), "executing requests");

    let mut service = LocatorService::new(config);
    for reply in execute_all(&mut service, &requests) {
        println!("{}", serde_json::to_string(&reply)?);
    }

    Ok(())
}
