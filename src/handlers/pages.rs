//! Static page handlers

use axum::response::Html;

use crate::templates;

/// `GET /` - landing page
pub async fn index() -> Html<String> {
    Html(templates::index_page())
}

/// `GET /predictdata` - empty input form
pub async fn predict_form() -> Html<String> {
    Html(templates::form_page(None))
}
