use std::time::Instant;

use actix_web::Error;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use tracing::{error, info, warn};

/// Logs one line per completed request.
pub async fn log_request(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req.path().to_string();

    let result = next.call(req).await;

    let status = match &result {
        Ok(res) => res.status(),
        Err(err) => err.as_response_error().status_code(),
    };
    let status_code = status.as_u16();
    let duration_us = start.elapsed().as_micros() as u64;

    if status.is_server_error() {
        error!(%method, %path, status_code, duration_us, "request completed");
    } else if status.is_client_error() {
        warn!(%method, %path, status_code, duration_us, "request completed");
    } else {
        info!(%method, %path, status_code, duration_us, "request completed");
    }

    result
}
