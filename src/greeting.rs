//! The greeting subject and the response body rendered from it.

use axum::{
    body::Bytes,
    http::header::{HeaderValue, CONTENT_TYPE},
    response::{IntoResponse, Response},
};

/// The name read from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingSubject(String);

impl GreetingSubject {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Precomputed response body for `GET /`.
///
/// Built once during startup. Cloning shares the underlying buffer, so every
/// request hands out the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    body: Bytes,
}

impl Greeting {
    pub fn for_subject(subject: &GreetingSubject) -> Self {
        Self {
            body: Bytes::from(format!("hello world, {}", subject.name())),
        }
    }

    pub fn as_str(&self) -> &str {
        // Built from a String in for_subject
        std::str::from_utf8(&self.body).unwrap_or_default()
    }
}

impl IntoResponse for Greeting {
    fn into_response(self) -> Response {
        (
            [(
                CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            )],
            self.body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_body_format() {
        let greeting = Greeting::for_subject(&GreetingSubject::new("Ada"));
        assert_eq!(greeting.as_str(), "hello world, Ada");
    }

    #[test]
    fn test_body_keeps_name_verbatim() {
        let greeting = Greeting::for_subject(&GreetingSubject::new("Grace <Hopper> & co"));
        assert_eq!(greeting.as_str(), "hello world, Grace <Hopper> & co");
    }

    #[test]
    fn test_empty_name_is_allowed() {
        // name is NOT NULL but may be empty
        let greeting = Greeting::for_subject(&GreetingSubject::new(""));
        assert_eq!(greeting.as_str(), "hello world, ");
    }

    #[test]
    fn test_into_response() {
        let response = Greeting::for_subject(&GreetingSubject::new("Ada")).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
