//! CLI parser
use clap::Parser;
use std::num::NonZeroU16;
use std::path::PathBuf;

use crate::constants::{DEFAULT_MODEL, DEFAULT_OLLAMA_URL};

#[derive(Parser, Debug)]
/// CLI Options
pub struct CliOptions {
    #[clap(long, help = "Enable debug logging", env = "PICSTORY_DEBUG")]
    /// Enable debug logging. Env: PICSTORY_DEBUG
    pub debug: bool,
    #[clap(long, short, default_value = "5000", env = "PICSTORY_PORT")]
    /// http listener port, defaults to `5000`.
    /// Env: PICSTORY_PORT
    pub port: NonZeroU16,
    #[clap(
        long,
        short,
        default_value = "127.0.0.1",
        env = "PICSTORY_LISTEN_ADDRESS"
    )]
    /// Listen address, defaults to `127.0.0.1`.
    /// Env: PICSTORY_LISTEN_ADDRESS
    pub listen_address: String,
    #[clap(
        long,
        short,
        default_value = "sqlite://picstory.sqlite?mode=rwc",
        env = "PICSTORY_DATABASE_URL"
    )]
    /// Database connection URL, eg `sqlite:///data/picstory.sqlite?mode=rwc`.
    /// Env: PICSTORY_DATABASE_URL
    pub database_url: String,
    #[clap(long, short, env = "PICSTORY_UPLOAD_DIR")]
    /// Directory uploaded images are saved to, eg `/data/uploads`.
    /// Env: PICSTORY_UPLOAD_DIR
    pub upload_dir: Option<PathBuf>,
    #[clap(long, default_value = DEFAULT_OLLAMA_URL, env = "PICSTORY_OLLAMA_URL")]
    /// Base URL of the model service used for story generation.
    /// Env: PICSTORY_OLLAMA_URL
    pub ollama_url: String,
    #[clap(long, default_value = DEFAULT_MODEL, env = "PICSTORY_MODEL")]
    /// Multimodal model identifier sent to the model service.
    /// Env: PICSTORY_MODEL
    pub model: String,
}
