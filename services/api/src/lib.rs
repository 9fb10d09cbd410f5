mod cli;
mod commands;
mod demo;
mod infra;
mod routes;
mod server;

use investor_visa::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
