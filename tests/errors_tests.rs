//! Error type tests

use cpu_exporter::errors::ExporterError;

#[test]
fn test_display_includes_type_and_message() {
    let err = ExporterError::sampling("permission denied");
    assert_eq!(err.to_string(), "CPU Sampling Error: permission denied");

    let err = ExporterError::encoding("buffer overflow");
    assert_eq!(err.to_string(), "Metrics Encoding Error: buffer overflow");

    let err = ExporterError::registry("duplicate metric");
    assert_eq!(err.to_string(), "Metrics Registry Error: duplicate metric");
}

#[test]
fn test_accessors() {
    let err = ExporterError::sampling("boom");
    assert_eq!(err.error_type(), "CPU Sampling Error");
    assert_eq!(err.message(), "boom");
}

#[test]
fn test_from_prometheus_error() {
    let err: ExporterError =
        prometheus::Error::Msg("encode failed".to_string()).into();
    assert!(matches!(err, ExporterError::Encoding(_)));
    assert!(err.message().contains("encode failed"));
}

#[test]
fn test_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
    assert_error(ExporterError::sampling("boom"));
}
