//! HTTP services and route wiring

pub mod services;

pub use services::{BannerService, MetricsService};

use actix_web::web;

/// Route configuration shared by the server and the test harness.
///
/// Anything outside these two routes falls through to actix's default
/// not-found handling.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(BannerService::banner))
        .route("/metrics", web::get().to(MetricsService::metrics));
}
