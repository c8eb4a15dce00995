mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use pacing_desk::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
