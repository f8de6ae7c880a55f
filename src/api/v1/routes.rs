/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /templates (registry を名前で引く untyped 操作) と /ids/{template}/{*id} (typed) を登録
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::api::v1::handlers::{
    health::health,
    ids::describe_id,
    templates::{format_id, list_templates, parse_id, validate_id},
};
use crate::ids::{
    beta::GroupIdCalendarCalendarViewIdExceptionOccurrenceIdAttachmentId,
    stable::{GroupIdCalendarViewIdInstanceIdAttachmentId, UserIdInferenceClassificationOverrideId},
};
use crate::resourceids::ResourceId;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/templates", get(list_templates))
        .route("/templates/{name}/parse", post(parse_id))
        .route("/templates/{name}/format", post(format_id))
        .route("/templates/{name}/validate", post(validate_id))
        .merge(typed::<GroupIdCalendarCalendarViewIdExceptionOccurrenceIdAttachmentId>())
        .merge(typed::<GroupIdCalendarViewIdInstanceIdAttachmentId>())
        .merge(typed::<UserIdInferenceClassificationOverrideId>())
}

fn typed<T>() -> Router<AppState>
where
    T: ResourceId + Send + Sync + 'static,
{
    let path = format!("/ids/{}/{{*id}}", T::TEMPLATE.name);
    Router::new().route(&path, get(describe_id::<T>))
}
