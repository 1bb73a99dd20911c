//! Handler for the public recruiter opportunity form.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use folio_core::{
  form::RecruiterForm,
  message::Message,
  ports::{Latency, SessionPersistence},
};
use serde::Serialize;

use crate::{AppState, error::ApiError};

/// Acknowledgement shown to the recruiter after a successful submission.
#[derive(Debug, Serialize)]
pub struct Submitted {
  pub title:       &'static str,
  pub description: &'static str,
  pub message:     Message,
}

/// `POST /recruiters/messages` — returns 201 + [`Submitted`].
pub async fn submit<P, L>(
  State(state): State<AppState<P, L>>,
  Json(form): Json<RecruiterForm>,
) -> Result<impl IntoResponse, ApiError>
where
  P: SessionPersistence + 'static,
  L: Latency + 'static,
{
  let input = form.validate()?;
  state.submit_latency.wait().await;
  let message = state.messages.add_message(input);

  Ok((
    StatusCode::CREATED,
    Json(Submitted {
      title: "Message sent successfully!",
      description: "Thank you for your interest. I'll get back to you soon.",
      message,
    }),
  ))
}
