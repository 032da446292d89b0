use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::config::SceneConfig;

/// clap에서 쓸 로그 단계
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "spotlight")]
#[command(about = "Renders spheres and planes lit by a single movable point light")]
pub struct Args {
    #[arg(short, long, help = "Scene description (TOML); the built-in scene is used when omitted")]
    pub config: Option<PathBuf>,

    #[arg(short, long, default_value = "output.png", help = "Output PNG path")]
    pub output: PathBuf,

    #[arg(long, help = "Image width in pixels (overrides the scene file)")]
    pub width: Option<u32>,

    #[arg(long, help = "Image height in pixels (overrides the scene file)")]
    pub height: Option<u32>,

    #[arg(long, allow_negative_numbers = true, help = "Screen-plane x the light is aimed through")]
    pub light_x: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help = "Screen-plane y the light is aimed through")]
    pub light_y: Option<f64>,

    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,
}

impl Args {
    // 명령줄 값이 설정 파일보다 우선
    pub fn apply(&self, config: &mut SceneConfig) {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(x) = self.light_x {
            config.light.x = x;
        }
        if let Some(y) = self.light_y {
            config.light.y = y;
        }
    }
}
