use crate::error::ApiError;
use axum::{
    extract::{FromRequestParts, OriginalUri, Query},
    http::{header::HOST, request::Parts},
};
use downtrack::PagedRequest;

/// Page parameters of the query string, with the absolute URL the request
/// arrived on as the base for page links
#[derive(Debug)]
pub struct Paged(pub PagedRequest);

impl<S> FromRequestParts<S> for Paged
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(request) = Query::<PagedRequest>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::MalformedRequest(rejection.body_text()))?;

        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|original| original.0.clone())
            .unwrap_or_else(|| parts.uri.clone());
        let base_url = match parts.headers.get(HOST).and_then(|host| host.to_str().ok()) {
            Some(host) => {
                let scheme = parts
                    .headers
                    .get("x-forwarded-proto")
                    .and_then(|proto| proto.to_str().ok())
                    .unwrap_or("http");
                format!("{scheme}://{host}{uri}")
            }
            None => uri.to_string(),
        };

        Ok(Self(request.with_base_url(base_url)))
    }
}
