mod cli;
mod infra;
mod propose;
mod routes;
mod server;

use capsule_stylist::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
