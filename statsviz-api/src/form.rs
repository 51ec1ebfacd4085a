use crate::error::ApiError;
use axum::{
    Form,
    extract::{FromRequest, Multipart, Query, Request, multipart::MultipartError},
    http::header,
};
use serde::Deserialize;

const FIELD: &str = "body";

#[derive(Deserialize)]
struct Fields {
    body: Option<String>,
}

/// The `body` form field, taken from an urlencoded or multipart request body
/// first and the query string second. Missing everywhere reads as empty.
pub struct UploadField(pub String);

impl<S> FromRequest<S> for UploadField
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let from_query = Query::<Fields>::try_from_uri(req.uri())?.0.body;

        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let from_body = if content_type.starts_with("multipart/form-data") {
            multipart_field(Multipart::from_request(req, state).await?).await?
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            Form::<Fields>::from_request(req, state).await?.0.body
        } else {
            None
        };

        Ok(UploadField(from_body.or(from_query).unwrap_or_default()))
    }
}

async fn multipart_field(mut multipart: Multipart) -> Result<Option<String>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FIELD) {
            return Ok(Some(field.text().await?));
        }
    }

    Ok(None)
}
