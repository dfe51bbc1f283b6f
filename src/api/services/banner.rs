//! Liveness banner endpoint

use actix_web::{HttpResponse, Responder};
use tracing::trace;

/// Banner service handler
pub struct BannerService;

impl BannerService {
    /// Handle the root liveness request.
    ///
    /// Always succeeds, regardless of sampler state.
    pub async fn banner() -> impl Responder {
        trace!("Received liveness banner request");

        HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body("CPU metrics exporter running")
    }
}
