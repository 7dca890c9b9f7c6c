//! Message and notification endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use domain::models::message::{ComposeDraft, Message, MessageFilter};
use domain::models::notification::{CommunicationStats, Notification, NotificationFilter};
use domain::store::SubmitContext;
use shared::id::RecordId;
use tracing::info;
use validator::Validate;

use super::ListResponse;
use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{ApiJson, ApiQuery};

/// GET /api/v1/messages?status=&priority=&search=
pub async fn list_messages(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<MessageFilter>,
) -> Json<ListResponse<Message>> {
    Json(state.messages().list(&filter).await.into())
}

/// Compose and send a message.
///
/// POST /api/v1/messages
pub async fn send_message(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<ComposeDraft>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    draft.validate()?;

    let message = state
        .messages()
        .send(draft, &SubmitContext::current())
        .await?;

    info!(
        message_id = %message.id,
        recipient = %message.recipient,
        priority = %message.priority,
        "Message sent"
    );

    Ok((StatusCode::CREATED, Json(message)))
}

/// GET /api/v1/messages/:id
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Message>, ApiError> {
    state
        .messages()
        .find(&id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::record_not_found("Message", id.as_str()))
}

/// Open a message, moving it from Unread to Read.
///
/// POST /api/v1/messages/:id/read
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Message>, ApiError> {
    let message = state
        .messages()
        .mark_read(&id)
        .await
        .ok_or_else(|| ApiError::record_not_found("Message", id.as_str()))?;

    info!(message_id = %message.id, status = %message.status, "Message opened");

    Ok(Json(message))
}

/// DELETE /api/v1/messages/:id
pub async fn delete_message(State(state): State<AppState>, Path(id): Path<RecordId>) -> StatusCode {
    if state.messages().delete(&id).await {
        info!(message_id = %id, "Message deleted");
    }
    StatusCode::NO_CONTENT
}

/// GET /api/v1/notifications?type=&read=&search=
pub async fn list_notifications(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<NotificationFilter>,
) -> Json<ListResponse<Notification>> {
    Json(state.notifications().list(&filter).await.into())
}

/// POST /api/v1/notifications/:id/read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Notification>, ApiError> {
    let notification = state
        .notifications()
        .mark_read(&id)
        .await
        .ok_or_else(|| ApiError::record_not_found("Notification", id.as_str()))?;

    info!(notification_id = %notification.id, "Notification marked as read");

    Ok(Json(notification))
}

/// DELETE /api/v1/notifications/:id
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> StatusCode {
    if state.notifications().delete(&id).await {
        info!(notification_id = %id, "Notification deleted");
    }
    StatusCode::NO_CONTENT
}

/// GET /api/v1/communication/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<CommunicationStats> {
    Json(state.dashboard().communication_stats().await)
}
