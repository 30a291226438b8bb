//! API utility functions
//!
//! Contains the shared router state and helpers used by the article handlers.

use crate::articles::ArticlesService;
use crate::error::AppError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt::Display;
use std::sync::Arc;

/// State handed to every article route
pub type RouterState = Arc<ArticlesService>;

/// JSON request body that tolerates a missing body or content type
///
/// An empty body, a non-JSON content type or a top-level value that is not
/// an object all read as `{}`, leaving field checks to the handler. Only a
/// JSON body that fails to parse is rejected.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|content_type| {
                let mime = content_type.split(';').next().unwrap_or_default().trim();
                mime == "application/json" || mime.ends_with("+json")
            })
            .unwrap_or(false);

        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(|rejection| AppError::InvalidBody(rejection.body_text()))?;

        let object = if is_json && !bytes.iter().all(u8::is_ascii_whitespace) {
            match serde_json::from_slice::<Value>(&bytes)
                .map_err(|e| AppError::InvalidBody(e.to_string()))?
            {
                Value::Object(map) => map,
                _ => Map::new(),
            }
        } else {
            Map::new()
        };

        serde_json::from_value(Value::Object(object))
            .map(JsonBody)
            .map_err(|e| AppError::InvalidBody(e.to_string()))
    }
}

/// JavaScript truthiness of a JSON value
///
/// `null`, `false`, `0` and `""` are falsy; everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text stored for a JSON field value
///
/// Strings are kept as-is; any other value is stored as its JSON text.
pub fn into_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Join `segment` onto a request path the way `path.posix.join` does
///
/// Empty and `.` segments are dropped and `..` pops the previous segment,
/// so duplicate slashes never reach the result.
///
/// # Arguments
/// * `base` - Request path the resource was created under
/// * `segment` - Trailing component, usually the new resource id
pub fn join_location(base: &str, segment: impl Display) -> String {
    let segment = segment.to_string();
    let mut parts: Vec<&str> = Vec::new();

    for part in base.split('/').chain(segment.split('/')) {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if base.starts_with('/') {
        format!("/{}", joined)
    } else {
        joined
    }
}
