//! Shared constants/setters for things
//!

use std::path::PathBuf;
use std::sync::LazyLock;

/// The default place we put uploaded images
pub static UPLOAD_DIR: LazyLock<PathBuf> = LazyLock::new(|| PathBuf::from("./uploads"));

/// Default base URL of the Ollama-compatible model service
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Default multimodal model used for story generation
pub const DEFAULT_MODEL: &str = "qwen2.5vl:7b";

/// The prompt sent to the model along with every uploaded image
pub const STORY_PROMPT: &str = "Write a short story, at most 150 words. \
Invent something genuinely funny, imaginative and entirely fictional, inspired by this image. \
Do not describe the image: use it as a source of inspiration. \
The story should be humorous, surprising, and tell a coherent adventure.";
