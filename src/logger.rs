use env_logger::{Builder, Env};
use log::{LevelFilter, SetLoggerError};

/// 로그 단계를 정하고 전역 로거를 한 번만 설치함.
/// 이미 설치되어 있으면 SetLoggerError
pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    // SPOTLIGHT_LOG가 있으면 모듈별 필터를 덧붙임
    Builder::new()
        .filter_level(level)
        .parse_env(Env::new().filter("SPOTLIGHT_LOG"))
        .format_timestamp_millis()
        .try_init()
}
