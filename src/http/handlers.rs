use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::PhonebookError;
use crate::model::{Contact, NewContact};
use crate::ops::contact_ops;
use crate::queries::{contact_queries, info_queries};

use super::state::AppState;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for PhonebookError {
    fn into_response(self) -> Response {
        let status = match &self {
            PhonebookError::MissingFields => StatusCode::BAD_REQUEST,
            PhonebookError::NameTaken { .. } => StatusCode::CONFLICT,
            PhonebookError::NotFound { .. } => return StatusCode::NOT_FOUND.into_response(),
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub async fn list_persons(State(state): State<Arc<AppState>>) -> Json<Vec<Contact>> {
    let directory = state.directory.read().await;
    Json(contact_queries::all_contacts(&directory))
}

pub async fn get_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, PhonebookError> {
    let directory = state.directory.read().await;
    contact_queries::get_contact(&directory, &id).map(Json)
}

pub async fn delete_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, PhonebookError> {
    let mut directory = state.directory.write().await;
    contact_ops::delete_contact(&mut directory, &id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// The body is parsed leniently; malformed JSON counts as missing fields.
pub async fn create_person(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Contact>), PhonebookError> {
    let payload = NewContact::from_body(&body);
    let mut directory = state.directory.write().await;
    match contact_ops::add_contact(
        &mut directory,
        payload.name.as_deref(),
        payload.number.as_deref(),
    ) {
        Ok(contact) => Ok((StatusCode::CREATED, Json(contact))),
        Err(e) => {
            tracing::warn!(error = %e, "Rejected contact");
            Err(e)
        }
    }
}

pub async fn info(State(state): State<Arc<AppState>>) -> Html<String> {
    let directory = state.directory.read().await;
    Html(info_queries::info(&directory).to_html())
}

pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
