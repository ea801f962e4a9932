use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::services::prompt::{build_message_prompt, MessageBrief};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMessageRequest {
    pub user_type: Option<String>,
    pub message_type: Option<String>,
    pub channel: Option<String>,
    pub custom_prompt: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GenerateMessageResponse {
    pub message: String,
}

fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub async fn generate_message(
    body: web::Json<GenerateMessageRequest>,
    state: web::Data<AppState>,
) -> ApiResult<HttpResponse> {
    let (recipient, goal, channel) = match (
        required(&body.user_type),
        required(&body.message_type),
        required(&body.channel),
    ) {
        (Some(r), Some(g), Some(c)) => (r, g, c),
        _ => {
            return Err(ApiError::validation(
                "Missing required fields: userType, messageType, channel",
            ))
        }
    };

    let brief = MessageBrief {
        recipient,
        goal,
        channel,
        instructions: body.custom_prompt.as_deref(),
    };
    let prompt = build_message_prompt(&brief, &state.llm.config().brand);

    let message = state
        .llm
        .complete(&prompt)
        .await
        .map_err(|err| ApiError::Generation { details: err.to_string() })?;

    Ok(HttpResponse::Ok().json(GenerateMessageResponse { message }))
}
