//! Prometheus metrics endpoint
//!
//! Exposes the CPU gauge in Prometheus text format at `/metrics`.

use std::sync::Arc;

use actix_web::{HttpResponse, Responder, web};
use tracing::error;

use crate::metrics::MetricsHandle;

/// Metrics service handler
pub struct MetricsService;

impl MetricsService {
    /// Handle metrics export request
    pub async fn metrics(metrics: web::Data<Arc<dyn MetricsHandle>>) -> impl Responder {
        match metrics.export() {
            Ok(output) => HttpResponse::Ok()
                .content_type("text/plain; version=0.0.4; charset=utf-8")
                .body(output),
            Err(e) => {
                error!("Failed to render metrics: {}", e);
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body(e.to_string())
            }
        }
    }
}
