//! HTTP handlers for the ranking endpoint.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{RankTableCommand, RankTableError, RankTableHandler};

use super::dto::{
    parse_impacts, parse_weights, validate_email, ErrorResponse, FormError, RankResponse,
};

/// Handler state for the ranking routes.
#[derive(Clone)]
pub struct RankHandlers {
    rank_handler: Arc<RankTableHandler>,
}

impl RankHandlers {
    pub fn new(rank_handler: Arc<RankTableHandler>) -> Self {
        Self { rank_handler }
    }
}

/// Collected multipart fields before validation.
#[derive(Default)]
struct RankForm {
    file: Option<String>,
    weights: Option<String>,
    impacts: Option<String>,
    email: Option<String>,
}

impl RankForm {
    fn into_command(self) -> Result<RankTableCommand, FormError> {
        let csv_text = self.file.ok_or(FormError::MissingField("file"))?;
        let weights_text = self.weights.ok_or(FormError::MissingField("weights"))?;
        let impacts_text = self.impacts.ok_or(FormError::MissingField("impacts"))?;
        let recipient = self.email.ok_or(FormError::MissingField("email"))?;

        validate_email(&recipient)?;
        let weights = parse_weights(&weights_text)?;
        let impacts = parse_impacts(&impacts_text)?;
        if weights.len() != impacts.len() {
            return Err(FormError::CountMismatch);
        }

        Ok(RankTableCommand {
            csv_text,
            weights,
            impacts,
            recipient,
        })
    }
}

/// POST /api/topsis - Rank an uploaded CSV and email the result
pub async fn rank_csv(
    State(handlers): State<RankHandlers>,
    mut multipart: Multipart,
) -> Response {
    let mut form = RankForm::default();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(_) => return bad_request(FormError::InvalidFile.to_string()),
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                // The upload must be valid UTF-8 text to be a parseable CSV.
                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(_) => return bad_request(FormError::InvalidFile.to_string()),
                };
                match String::from_utf8(bytes.to_vec()) {
                    Ok(text) => form.file = Some(text),
                    Err(_) => return bad_request(FormError::InvalidFile.to_string()),
                }
            }
            "weights" | "impacts" | "email" => {
                let text = match field.text().await {
                    Ok(text) => text,
                    Err(_) => return bad_request(FormError::InvalidFile.to_string()),
                };
                match name.as_str() {
                    "weights" => form.weights = Some(text),
                    "impacts" => form.impacts = Some(text),
                    _ => form.email = Some(text),
                }
            }
            // Unknown fields are ignored.
            _ => {}
        }
    }

    let cmd = match form.into_command() {
        Ok(cmd) => cmd,
        Err(e) => return bad_request(e.to_string()),
    };

    match handlers.rank_handler.handle(cmd).await {
        Ok(_) => (
            StatusCode::OK,
            Json(RankResponse {
                message: "TOPSIS result sent to your email successfully".to_string(),
            }),
        )
            .into_response(),
        Err(e) => handle_rank_error(e),
    }
}

fn bad_request(message: String) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response()
}

fn handle_rank_error(error: RankTableError) -> Response {
    match error {
        RankTableError::InvalidTable(e) => bad_request(e.to_string()),
        RankTableError::Computation(e) => bad_request(e.to_string()),
        RankTableError::Delivery(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::with_details(
                "Failed to send email",
                e.to_string(),
            )),
        )
            .into_response(),
    }
}
