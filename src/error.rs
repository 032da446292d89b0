use thiserror::Error;

/// 광선 추적 중에 생길 수 있는 오류
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TraceError {
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f64),
    #[error("light position is unresolved: the light does not strike any sphere")]
    NoIllumination,
}

/// 씬 설정 파일을 읽거나 씬을 만드는 중에 생기는 오류
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scene config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid scene: {0}")]
    Scene(#[from] TraceError),
    #[error("image resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },
    #[error("ambient factor must be within [0, 1], got {0}")]
    InvalidAmbient(f64),
}
