use std::sync::Arc;

use clap::Parser;
use picstory::config::setup_logging;
use picstory::generator::OllamaGenerator;
use sea_orm_migration::MigratorTrait;
use tracing::error;

#[tokio::main(flavor = "multi_thread", worker_threads = 32)]
async fn main() {
    let cli = picstory::cli::CliOptions::parse();

    if setup_logging(cli.debug).is_err() {
        return;
    }

    let db = match picstory::db::connect_db(&cli.database_url).await {
        Ok(db) => db,
        Err(err) => {
            error!("Database connection error: {}", err);
            return;
        }
    };

    if let Err(err) = picstory::db::migrations::Migrator::up(&db, None).await {
        error!("Database migration error: {}", err);
        return;
    }

    let upload_dir = cli
        .upload_dir
        .clone()
        .unwrap_or_else(|| picstory::constants::UPLOAD_DIR.clone());

    let generator = Arc::new(OllamaGenerator::new(&cli.ollama_url, &cli.model));

    if let Err(err) = picstory::web::setup_server(
        &cli.listen_address,
        cli.port,
        upload_dir,
        generator,
        db,
    )
    .await
    {
        error!("Application error: {}", err);
    }
}
