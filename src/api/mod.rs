//! REST Client
//!
//! Thin JSON wrapper over `gloo-net`, organized by domain like the rest of the frontend.

mod recipe;

use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;

use crate::config::api_config;
use crate::error::ApiError;

pub use recipe::*;

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            HttpMethod::Get => Request::get(url),
            HttpMethod::Post => Request::post(url),
            HttpMethod::Put => Request::put(url),
            HttpMethod::Delete => Request::delete(url),
        }
    }
}

/// Parsed response body, chosen by the response `Content-Type`
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

/// Default JSON content type with caller headers layered on top.
/// Header names compare case-insensitively; the caller's value wins.
pub fn merge_headers(extra: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut merged = vec![("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())];
    for (name, value) in extra {
        match merged.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(name)) {
            Some(slot) => slot.1 = value.to_string(),
            None => merged.push((name.to_string(), value.to_string())),
        }
    }
    merged
}

/// JSON when the content type says so and the text parses, text otherwise.
/// An empty JSON body reads as `null`.
pub fn parse_body(content_type: Option<&str>, text: String) -> ResponseBody {
    let is_json = content_type
        .map(|ct| ct.to_ascii_lowercase().contains(JSON_CONTENT_TYPE))
        .unwrap_or(false);
    if !is_json {
        return ResponseBody::Text(text);
    }
    if text.trim().is_empty() {
        return ResponseBody::Json(Value::Null);
    }
    match serde_json::from_str(&text) {
        Ok(value) => ResponseBody::Json(value),
        Err(_) => ResponseBody::Text(text),
    }
}

/// User-facing message for a non-2xx response
pub fn failure_message(status: u16, body: &ResponseBody) -> String {
    if let ResponseBody::Json(value) = body {
        match value.get("detail") {
            None | Some(Value::Null) => {}
            Some(Value::String(detail)) if detail.is_empty() => {}
            Some(Value::String(detail)) => return detail.clone(),
            Some(other) => return other.to_string(),
        }
    }
    format!("Request failed ({})", status)
}

/// Send one request to `{base}{path}`. `body` is an already-serialized JSON document.
pub(crate) async fn request(
    method: HttpMethod,
    path: &str,
    body: Option<String>,
    headers: &[(&str, &str)],
) -> Result<ResponseBody, ApiError> {
    let url = api_config().endpoint(path);
    log::debug!("[API] {} {}", method.as_str(), url);

    let mut builder = method.builder(&url);
    for (name, value) in merge_headers(headers) {
        builder = builder.header(&name, &value);
    }
    let request = match body {
        Some(json) => builder.body(json),
        None => builder.build(),
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;

    let response = request.send().await.map_err(|e| {
        log::error!("[API] {} {} failed: {}", method.as_str(), url, e);
        ApiError::Network(e.to_string())
    })?;

    let status = response.status();
    let content_type = response.headers().get("content-type");
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let parsed = parse_body(content_type.as_deref(), text);

    if !(200..300).contains(&status) {
        let message = failure_message(status, &parsed);
        log::warn!("[API] {} {} -> {}: {}", method.as_str(), url, status, message);
        return Err(ApiError::Http { status, message });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_merge_headers_defaults_to_json() {
        assert_eq!(
            merge_headers(&[]),
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn test_merge_headers_caller_overrides_case_insensitively() {
        let merged = merge_headers(&[("content-type", "text/plain"), ("Accept", "application/json")]);
        assert_eq!(
            merged,
            vec![
                ("Content-Type".to_string(), "text/plain".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_body_by_content_type() {
        assert_eq!(
            parse_body(Some("application/json; charset=utf-8"), r#"{"ok":true}"#.into()),
            ResponseBody::Json(json!({"ok": true}))
        );
        assert_eq!(
            parse_body(Some("text/plain"), r#"{"ok":true}"#.into()),
            ResponseBody::Text(r#"{"ok":true}"#.into())
        );
        assert_eq!(parse_body(None, "hello".into()), ResponseBody::Text("hello".into()));
        assert_eq!(parse_body(Some("application/json"), "".into()), ResponseBody::Json(Value::Null));
        assert_eq!(
            parse_body(Some("application/json"), "not json".into()),
            ResponseBody::Text("not json".into())
        );
    }

    #[test]
    fn test_failure_message_from_string_detail() {
        let body = ResponseBody::Json(json!({"detail": "Title already exists"}));
        assert_eq!(failure_message(409, &body), "Title already exists");
    }

    #[test]
    fn test_failure_message_serializes_structured_detail() {
        let body = ResponseBody::Json(json!({"detail": [{"loc": ["body", "title"], "msg": "field required"}]}));
        assert_eq!(
            failure_message(422, &body),
            r#"[{"loc":["body","title"],"msg":"field required"}]"#
        );
    }

    #[test]
    fn test_failure_message_fallbacks() {
        assert_eq!(failure_message(500, &ResponseBody::Text("Internal Server Error".into())), "Request failed (500)");
        assert_eq!(failure_message(404, &ResponseBody::Json(json!({"error": "nope"}))), "Request failed (404)");
        assert_eq!(failure_message(400, &ResponseBody::Json(json!({"detail": ""}))), "Request failed (400)");
        assert_eq!(failure_message(502, &ResponseBody::Json(Value::Null)), "Request failed (502)");
    }
}
