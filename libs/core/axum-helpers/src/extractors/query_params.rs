//! Query string extractor with structured JSON rejections.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Query string extractor.
///
/// Behaves like [`axum::extract::Query`] but rejects unparsable input with an
/// [`AppError::QueryRejection`], so clients get the standard error body
/// instead of axum's plain-text rejection.
///
/// # Example
/// ```ignore
/// use axum_helpers::extractors::QueryParams;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Paging {
///     page: Option<i64>,
/// }
///
/// async fn list(QueryParams(paging): QueryParams<Paging>) -> String {
///     format!("page {:?}", paging.page)
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(QueryParams(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Paging {
        page: Option<i64>,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            get(|QueryParams(p): QueryParams<Paging>| async move { format!("{:?}", p.page) }),
        )
    }

    #[tokio::test]
    async fn test_absent_parameter_is_none() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"None");
    }

    #[tokio::test]
    async fn test_unparsable_parameter_returns_json_400() {
        let response = app()
            .oneshot(Request::get("/?page=abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "INVALID_QUERY");
    }
}
