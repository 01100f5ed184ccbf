mod config;
mod errors;
mod handlers;
mod loader;
mod util;

use crate::loader::run;
use env_logger::Env;
use log::{error, info};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("Bot starting...");

    match run().await {
        Ok(_) => info!("Bot stopped"),
        Err(e) => error!("Error: {}", e),
    }
}
