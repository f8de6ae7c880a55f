/*
 * Responsibility
 * - GET /ids/{template}/{*id}: typed id として受けて正規化した id と説明を返す
 */
use axum::Json;

use crate::{
    api::v1::{dto::templates::DescribeResponse, extractors::ResourceIdPath},
    resourceids::ResourceId,
};

pub async fn describe_id<T>(ResourceIdPath(id): ResourceIdPath<T>) -> Json<DescribeResponse>
where
    T: ResourceId + Send + 'static,
{
    Json(DescribeResponse {
        id: id.id(),
        description: id.describe(),
    })
}
