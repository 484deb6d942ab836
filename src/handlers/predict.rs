//! Prediction handler

use axum::extract::State;
use axum::response::Html;
use axum::Form;

use crate::features::PredictForm;
use crate::templates;
use crate::AppState;

/// `POST /predictdata` - run the prediction and re-render the form page
/// with either the result or an error message. Always HTTP 200: a bad
/// request is answered on the page, not with a status code.
pub async fn predict(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> Html<String> {
    let message = match state.service.predict(&form) {
        Ok(prediction) => {
            tracing::info!(fwi = prediction.value(), "prediction served");
            format!("The predicted Fire Weather Index (FWI) is: {}", prediction)
        }
        Err(e) => {
            tracing::warn!("prediction failed: {}", e);
            e.user_message()
        }
    };

    Html(templates::form_page(Some(&message)))
}
