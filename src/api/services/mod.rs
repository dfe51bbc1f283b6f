pub mod banner;
pub mod metrics;

pub use banner::BannerService;
pub use metrics::MetricsService;
