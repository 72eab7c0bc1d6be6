mod chat;
mod config;
mod constants;
mod error;
mod event;
mod handler;
mod print_help;
mod upstream;
mod utils;

use crate::constants::UPSTREAM_TIMEOUT_SECS;
use crate::event::Context;
use crate::handler::ChatRelayHandler;
use crate::print_help::print_help;
use crate::utils::read_event;
use std::{env, error::Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "-help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    let event_path = args.get(1).map(String::as_str).unwrap_or("-");
    let request_id = args
        .get(2)
        .cloned()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let event = read_event(event_path)?;

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
        .build()?;

    let handler = ChatRelayHandler::new(client);
    let response = handler.handle(&event, &Context::new(request_id)).await;

    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}
