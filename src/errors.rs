use std::fmt;

#[derive(Debug, Clone)]
pub enum ExporterError {
    Sampling(String),
    Encoding(String),
    Registry(String),
}

impl ExporterError {
    /// Human-readable error category
    pub fn error_type(&self) -> &'static str {
        match self {
            ExporterError::Sampling(_) => "CPU Sampling Error",
            ExporterError::Encoding(_) => "Metrics Encoding Error",
            ExporterError::Registry(_) => "Metrics Registry Error",
        }
    }

    /// Error detail message
    pub fn message(&self) -> &str {
        match self {
            ExporterError::Sampling(msg) => msg,
            ExporterError::Encoding(msg) => msg,
            ExporterError::Registry(msg) => msg,
        }
    }
}

impl fmt::Display for ExporterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for ExporterError {}

impl ExporterError {
    pub fn sampling<T: Into<String>>(msg: T) -> Self {
        ExporterError::Sampling(msg.into())
    }

    pub fn encoding<T: Into<String>>(msg: T) -> Self {
        ExporterError::Encoding(msg.into())
    }

    pub fn registry<T: Into<String>>(msg: T) -> Self {
        ExporterError::Registry(msg.into())
    }
}

impl From<prometheus::Error> for ExporterError {
    fn from(err: prometheus::Error) -> Self {
        ExporterError::Encoding(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExporterError>;
