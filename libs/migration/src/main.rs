//! Schema CLI for the knowledge database.
//!
//! `DATABASE_URL=postgres://... cargo run -p migration -- up` applies pending
//! migrations; `status`, `down` and `fresh` are also available.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
