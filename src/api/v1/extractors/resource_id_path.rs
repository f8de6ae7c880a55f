/*
 * Responsibility
 * - Path の残り全体 ({*id}) を typed resource id として受け取る
 * - parse は strict (path は user 入力なので)
 * - 失敗時は AppError (400 INVALID_RESOURCE_ID) へ変換
 * 置かないもの
 *  - 具体的な resource 名 (T で受ける)
 */
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;
use crate::resourceids::ResourceId;

pub struct ResourceIdPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ResourceIdPath<T>
where
    T: ResourceId + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request("INVALID_RESOURCE_ID", e.body_text()))?;
        let id = T::parse(&raw)?;
        Ok(Self(id))
    }
}

impl<T: ResourceId> std::fmt::Debug for ResourceIdPath<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ResourceIdPath").field(&self.0.id()).finish()
    }
}
