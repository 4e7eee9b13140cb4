use askama::Template;
use askama_web::WebTemplate;

/// The upload form page.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub(crate) struct IndexTemplate;

/// Gallery page for a single upload: the saved image and its story.
#[derive(Template, WebTemplate)]
#[template(path = "gallery.html")]
pub(crate) struct GalleryTemplate {
    /// relative reference to the saved upload, eg `uploads/cat.png`
    pub(crate) image: String,
    pub(crate) story: String,
}
