//! Outgoing HTTP response type and the [`IntoResponse`] conversion trait.
//!
//! Handlers build a [`Response`] and return it; the server turns it into a
//! hyper response at the last moment. That is the entire job description.

use bytes::Bytes;
use http::StatusCode;
use http_body_util::Full;

/// An outgoing HTTP response.
///
/// # Shortcuts (200 OK)
///
/// ```rust
/// use blogd::Response;
/// use http::StatusCode;
///
/// Response::json(br#"{"id":1}"#.to_vec());
/// Response::text("hello");
/// Response::status(StatusCode::NO_CONTENT);
/// ```
///
/// # Builder (custom status or headers)
///
/// ```rust
/// use blogd::Response;
/// use http::StatusCode;
///
/// Response::builder()
///     .status(StatusCode::CREATED)
///     .header("location", "/blogs/hello-world")
///     .json(br#"{"id":"hello-world"}"#.to_vec());
/// ```
pub struct Response {
    body: Bytes,
    headers: Vec<(String, String)>,
    status: StatusCode,
}

impl Response {
    /// `200 OK` — `application/json`. Pass bytes straight from the
    /// serializer: `serde_json::to_vec(&val)?`.
    pub fn json(body: impl Into<Bytes>) -> Self {
        Self::with_content_type("application/json", body.into())
    }

    /// `200 OK` — `text/plain; charset=utf-8`.
    pub fn text(body: impl Into<String>) -> Self {
        Self::with_content_type("text/plain; charset=utf-8", body.into().into())
    }

    /// Response with the given status and no body.
    pub fn status(status: StatusCode) -> Self {
        Self { body: Bytes::new(), headers: Vec::new(), status }
    }

    /// `404 Not Found` with the service's fixed plain-text body.
    pub fn not_found() -> Self {
        Self::builder().status(StatusCode::NOT_FOUND).text("404 Not Found")
    }

    /// `500 Internal Server Error` with the service's fixed plain-text body.
    ///
    /// Every non-NotFound failure collapses into this one response; detail
    /// goes to the log, never to the caller.
    pub fn internal_error() -> Self {
        Self::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .text("500 Internal Server Error")
    }

    /// `405 Method Not Allowed` with a fixed plain-text body.
    pub fn method_not_allowed() -> Self {
        Self::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .text("405 Method Not Allowed")
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: Vec::new(), status: StatusCode::OK }
    }

    fn with_content_type(content_type: &str, body: Bytes) -> Self {
        Self {
            body,
            headers: vec![("content-type".to_owned(), content_type.to_owned())],
            status: StatusCode::OK,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Converts into the hyper-compatible response the connection writes out.
    pub(crate) fn into_http(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        // The only fallible inputs are the header strings, which this crate
        // constructs from valid literals.
        builder
            .body(Full::new(self.body))
            .unwrap_or_else(|_| http::Response::new(Full::new(Bytes::new())))
    }
}

/// Fluent builder for [`Response`]. Defaults to `200 OK`; terminated by a
/// typed body method so you always know what you are sending.
pub struct ResponseBuilder {
    headers: Vec<(String, String)>,
    status: StatusCode,
}

impl ResponseBuilder {
    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Terminate with a JSON body (`application/json`).
    pub fn json(self, body: impl Into<Bytes>) -> Response {
        self.finish("application/json", body.into())
    }

    /// Terminate with a plain-text body (`text/plain; charset=utf-8`).
    pub fn text(self, body: impl Into<String>) -> Response {
        self.finish("text/plain; charset=utf-8", body.into().into())
    }

    /// Terminate with no body.
    pub fn no_body(self) -> Response {
        Response { body: Bytes::new(), headers: self.headers, status: self.status }
    }

    fn finish(self, content_type: &str, body: Bytes) -> Response {
        let mut headers = vec![("content-type".to_owned(), content_type.to_owned())];
        headers.extend(self.headers);
        Response { body, headers, status: self.status }
    }
}

/// Conversion into an HTTP [`Response`], so handlers can return plain
/// strings or a bare status code.
pub trait IntoResponse {
    fn into_response(self) -> Response;
}

impl IntoResponse for Response {
    fn into_response(self) -> Response {
        self
    }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> Response {
        Response::text(self)
    }
}

impl IntoResponse for String {
    fn into_response(self) -> Response {
        Response::text(self)
    }
}

impl IntoResponse for StatusCode {
    fn into_response(self) -> Response {
        Response::status(self)
    }
}
