use axum::response::Html;

/// GET /
/// The single-page front end. Bundled into the binary at build time.
pub async fn index_handler() -> Html<&'static str> {
    const INDEX: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));
    Html(INDEX)
}
