//! Request ID propagation.
//!
//! `TracingLogger` assigns every request an id and records it on the root
//! span. This middleware copies that id into the `x-request-id` response
//! header so clients can quote it when reporting a problem.

use actix_web::{
    Error, HttpMessage,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{HeaderName, HeaderValue},
    middleware::Next,
};
use tracing_actix_web::RequestId;

/// Header name for request ID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Must be registered inside `TracingLogger` (wrapped before it).
pub async fn propagate_request_id(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let request_id = req.extensions().get::<RequestId>().cloned();

    let mut res = next.call(req).await?;

    if let Some(id) = request_id {
        if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
            res.headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
    }

    Ok(res)
}
