use crate::{
    dto::{ConvertMacRequest, ConvertMacResponse},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument, warn};

#[instrument(skip_all, name = "api_convert_mac_address")]
pub async fn convert_mac_address(
    State(state): State<AppState>,
    Json(req): Json<ConvertMacRequest>,
) -> Result<Json<ConvertMacResponse>, (StatusCode, String)> {
    info!(
        input_len = req.mac_address_list.len(),
        fortigate = %req.fortigate_name,
        group_choice = req.group_choice,
        "Conversion requested"
    );

    match state.generate_script.execute(&req.into_domain()) {
        Ok(result) => Ok(Json(ConvertMacResponse::from_result(result))),
        Err(e) => {
            warn!(error = %e, "Rejected conversion request");
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}
