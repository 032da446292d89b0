use anyhow::{anyhow, bail, Context};
use image::Rgb;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::cli::Args;
use crate::config::SceneConfig;
use crate::logger::init_logger;

pub mod cli;
pub mod config;
pub mod error;
mod logger;
pub mod spotlight;
pub mod util;

pub use crate::error::{ConfigError, TraceError};
pub use crate::spotlight::camera::{Camera, ScreenRect};
pub use crate::spotlight::light::Light;
pub use crate::spotlight::scene::{Axis, ObjectKind, Plane, Scene, SceneObject, Sphere, AMBIENT};
pub use crate::spotlight::{Frame, Pixel, Spotlight};

// 원래 캔버스처럼 아무것도 맞지 않은 곳은 검정
const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

pub fn run(args: Args) -> anyhow::Result<()> {
    init_logger(args.debug_level.clone().into()).context("installing logger")?;

    let mut config = match &args.config {
        Some(path) => SceneConfig::load(path).with_context(|| format!("loading scene from {}", path.display()))?,
        None => SceneConfig::default(),
    };
    args.apply(&mut config);

    let (spotlight, mut light) = config.build().context("building scene")?;
    info!(
        "Scene: {} objects, image {}x{}",
        spotlight.scene.objects().len(),
        spotlight.camera.width(),
        spotlight.camera.height()
    );

    // 처음 광원 위치가 구를 못 맞히면 그릴 것이 없음
    if !spotlight.resolve_light(&mut light)? {
        bail!(
            "initial light position ({}, {}) does not strike any sphere in the scene",
            config.light.x,
            config.light.y
        );
    }

    let progress = ProgressBar::new(spotlight.camera.height() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} rows ETA: {eta}")
            .map_err(|e| anyhow!("invalid progress template: {e}"))?,
    );

    let frame = spotlight.render_frame_with(&light, || progress.inc(1))?;
    progress.finish();

    frame
        .to_image(BACKGROUND)
        .save(&args.output)
        .with_context(|| format!("saving {}", args.output.display()))?;
    info!("Saved {}", args.output.display());

    Ok(())
}
