//! Web server and request handlers
use std::num::NonZeroU16;
use std::path::{Path as StdPath, PathBuf};
use std::sync::Arc;

use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use sea_orm::DatabaseConnection;
use tower_http::services::ServeDir;
use tracing::{error, info};

use crate::db::entities::stories;
use crate::error::PicstoryError;
use crate::generator::StoryGenerator;

mod views;

use views::{GalleryTemplate, IndexTemplate};

#[derive(Clone)]
pub(crate) struct AppState {
    upload_dir: PathBuf,
    generator: Arc<dyn StoryGenerator>,
    db: DatabaseConnection,
}

impl AppState {
    fn new(upload_dir: PathBuf, generator: Arc<dyn StoryGenerator>, db: DatabaseConnection) -> Self {
        Self {
            upload_dir,
            generator,
            db,
        }
    }
}

async fn index_handler() -> IndexTemplate {
    IndexTemplate
}

/// Handles the POST side of /upload: save the file, reuse or generate the
/// story, persist, render the gallery.
async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<GalleryTemplate, PicstoryError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| PicstoryError::BadRequest)?
    {
        if field.name() != Some("img") {
            continue;
        }
        let filename = field
            .file_name()
            .map(sanitize_filename)
            .filter(|name| !name.is_empty())
            .ok_or(PicstoryError::BadRequest)?;
        let bytes = field
            .bytes()
            .await
            .map_err(|_| PicstoryError::BadRequest)?;
        upload = Some((filename, bytes.to_vec()));
        break;
    }

    let (filename, bytes) = upload.ok_or(PicstoryError::BadRequest)?;

    tokio::fs::create_dir_all(&state.upload_dir).await?;
    let file_path = state.upload_dir.join(&filename);
    tokio::fs::write(&file_path, &bytes).await?;
    let image_path = file_path.to_string_lossy().into_owned();

    let story = match stories::find_by_image_path(&state.db, &image_path).await? {
        Some(existing) => {
            info!("Reusing stored story for {}", image_path);
            existing.story_text
        }
        None => {
            let story = state.generator.generate_story(&bytes).await?;
            stories::create(&state.db, &image_path, &story).await?;
            info!("Stored new story for {}", image_path);
            story
        }
    };

    Ok(GalleryTemplate {
        image: format!("uploads/{}", filename),
        story,
    })
}

/// Strips directory components and unsafe characters from a client-supplied
/// filename. Returns an empty string when nothing usable remains.
fn sanitize_filename(raw: &str) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let cleaned: String = base
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_') {
                ch
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('.');
    if cleaned.chars().all(|ch| ch == '_') {
        return String::new();
    }
    cleaned.to_string()
}

fn create_router(upload_dir: &StdPath) -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::get(index_handler))
        .route(
            "/upload",
            axum::routing::get(index_handler).post(upload_handler),
        )
        .route("/static/styles.css", axum::routing::get(styles_handler))
        .nest_service("/uploads", ServeDir::new(upload_dir))
}

async fn styles_handler() -> impl IntoResponse {
    const STYLES: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/styles.css"));
    ([(CONTENT_TYPE, "text/css")], STYLES)
}

/// Builds the application state and serves HTTP until the listener fails.
pub async fn setup_server(
    listen_addr: &str,
    port: NonZeroU16,
    upload_dir: PathBuf,
    generator: Arc<dyn StoryGenerator>,
    db: DatabaseConnection,
) -> Result<(), anyhow::Error> {
    let app = create_router(&upload_dir).with_state(AppState::new(upload_dir, generator, db));

    let addr = format!("{}:{}", listen_addr, port);
    info!("Starting server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server error: {}", err);
    }
    Ok(())
}
