//! Upload forwarding to the processing backend.
//!
//! # Responsibilities
//! - Capture the incoming multipart body without re-encoding it
//! - POST it to the backend's processing endpoint
//! - Relay the PDF on success, translate every failure into a ForwardError
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → UploadRequest::from_parts (content type + boundary checked, body untouched)
//!     → BackendTarget::resolve → POST <target>/highlight-pdf
//!         body opens with --<boundary>? no → MalformedUpload
//!     → 2xx:       body buffered → PdfArtifact
//!     → non-2xx:   error text    → ForwardError::Backend
//!     → no answer: connect/read  → ForwardError::Transport / BodyRead / Timeout
//! ```

use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::{Bytes, BytesMut};
use futures_util::StreamExt;

use crate::backend::{describe_error, BackendTarget};
use crate::config::BackendConfig;
use crate::http::X_REQUEST_ID;
use crate::proxy::error::ForwardError;
use crate::resilience::timeouts;

const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// Transport-independent description of an upload to relay.
#[derive(Debug)]
pub struct UploadRequest {
    /// Original content type, including the multipart boundary.
    pub content_type: HeaderValue,
    pub content_length: Option<HeaderValue>,
    pub request_id: Option<HeaderValue>,
    /// Multipart boundary taken from the content type.
    pub boundary: String,
    pub body: Body,
}

impl UploadRequest {
    /// Take the upload out of an inbound request.
    ///
    /// Only the headers are checked here; the body stays unread.
    pub fn from_request(request: Request<Body>) -> Result<Self, ForwardError> {
        let (parts, body) = request.into_parts();
        Self::from_parts(&parts.headers, body)
    }

    pub fn from_parts(headers: &HeaderMap, body: Body) -> Result<Self, ForwardError> {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .cloned()
            .ok_or_else(|| ForwardError::NotMultipart("no content type".to_string()))?;

        let not_multipart =
            || ForwardError::NotMultipart(String::from_utf8_lossy(content_type.as_bytes()).into_owned());

        let ct = content_type.to_str().map_err(|_| not_multipart())?;
        let is_multipart = ct
            .split(';')
            .next()
            .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(MULTIPART_FORM_DATA));
        if !is_multipart {
            return Err(not_multipart());
        }

        let boundary = boundary_param(ct)
            .ok_or_else(|| ForwardError::MalformedUpload("content type has no boundary".to_string()))?;

        Ok(Self {
            content_length: headers.get(header::CONTENT_LENGTH).cloned(),
            request_id: headers.get(X_REQUEST_ID).cloned(),
            boundary,
            content_type,
            body,
        })
    }
}

/// Processed document returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfArtifact {
    bytes: Bytes,
}

impl PdfArtifact {
    pub const CONTENT_TYPE: &'static str = "application/pdf";
    pub const CONTENT_DISPOSITION: &'static str = "attachment; filename=\"highlighted.pdf\"";

    pub fn new(bytes: Bytes) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }
}

impl IntoResponse for PdfArtifact {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, Self::CONTENT_TYPE),
                (header::CONTENT_DISPOSITION, Self::CONTENT_DISPOSITION),
            ],
            self.bytes,
        )
            .into_response()
    }
}

/// Relays uploads to the backend's processing endpoint.
#[derive(Debug, Clone)]
pub struct UploadForwarder {
    client: reqwest::Client,
    config: BackendConfig,
}

impl UploadForwarder {
    pub fn new(client: reqwest::Client, config: BackendConfig) -> Self {
        Self { client, config }
    }

    /// Forward one upload and wait for the backend's verdict.
    ///
    /// Waits indefinitely unless `forward_timeout_secs` is configured.
    pub async fn forward(&self, upload: UploadRequest) -> Result<PdfArtifact, ForwardError> {
        let target = BackendTarget::resolve(self.config.url.as_deref());
        let url = target.endpoint(&self.config.process_path);

        tracing::info!(
            url = %url,
            backend_configured = self.config.is_externally_set(),
            "Forwarding upload to backend"
        );

        timeouts::bounded(self.config.forward_timeout(), self.exchange(&url, upload))
            .await
            .map_err(|timed_out| {
                tracing::error!(url = %url, limit_secs = timed_out.limit().as_secs(), "Backend did not respond in time");
                ForwardError::Timeout(timed_out.limit())
            })?
    }

    async fn exchange(&self, url: &str, upload: UploadRequest) -> Result<PdfArtifact, ForwardError> {
        let body = replay_after_delimiter(upload.body, &upload.boundary).await?;

        let mut request = self
            .client
            .post(url)
            .header(header::CONTENT_TYPE, upload.content_type);
        if let Some(length) = upload.content_length {
            request = request.header(header::CONTENT_LENGTH, length);
        }
        if let Some(request_id) = upload.request_id {
            request = request.header(X_REQUEST_ID, request_id);
        }

        let response = request
            .body(body)
            .send()
            .await
            .map_err(|e| {
                let description = describe_error(&e);
                tracing::error!(url = %url, error = %description, "Backend request failed");
                ForwardError::Transport(description)
            })?;

        let status = response.status();
        if !status.is_success() {
            let details = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read backend error body");
                    String::new()
                }
            };
            tracing::error!(status = %status, "Backend returned error");
            tracing::error!(body = %details, "Backend response body");
            return Err(ForwardError::Backend { status, details });
        }

        let bytes = response.bytes().await.map_err(|e| {
            let description = describe_error(&e);
            tracing::error!(error = %description, "Failed to read backend PDF");
            ForwardError::BodyRead(description)
        })?;

        tracing::debug!(size = bytes.len(), "Backend returned PDF");
        Ok(PdfArtifact::new(bytes))
    }
}

/// `boundary` parameter of a multipart content type, unquoted. Empty values count as missing.
fn boundary_param(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .skip(1)
        .find_map(|param| {
            let (name, value) = param.split_once('=')?;
            name.trim()
                .eq_ignore_ascii_case("boundary")
                .then(|| value.trim().trim_matches('"').to_string())
        })
        .filter(|boundary| !boundary.is_empty())
}

/// Check that the upload opens with `--<boundary>`, then replay the bytes read
/// so far ahead of the rest of the stream.
async fn replay_after_delimiter(body: Body, boundary: &str) -> Result<reqwest::Body, ForwardError> {
    let delimiter = format!("--{boundary}");
    let mut stream = body.into_data_stream();
    let mut head = BytesMut::new();

    while head.len() < delimiter.len() {
        match stream.next().await {
            Some(Ok(chunk)) => head.extend_from_slice(&chunk),
            Some(Err(e)) => return Err(ForwardError::UploadRead(describe_error(&e))),
            None => break,
        }
    }

    if !head.starts_with(delimiter.as_bytes()) {
        return Err(ForwardError::MalformedUpload(
            "body does not open with the boundary delimiter".to_string(),
        ));
    }

    let head = futures_util::stream::once(std::future::ready(Ok::<_, axum::Error>(head.freeze())));
    Ok(reqwest::Body::wrap_stream(head.chain(stream)))
}
