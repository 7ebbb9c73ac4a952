mod cli;
mod demo;
mod obj;
mod output;
mod settings;

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use glint_core::cube;
use glint_renderer::{render, CancelToken, RenderOutcome};

use crate::cli::Args;
use crate::demo::DemoScene;
use crate::settings::RenderSettings;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let mut settings = match &args.config {
        Some(path) => RenderSettings::load(path)?,
        None => RenderSettings::default(),
    };
    settings.apply(&args);
    log::debug!("Settings: {settings:?}");

    let main_mesh = match &args.mesh {
        Some(path) => obj::load_obj(path)?,
        None => cube(1.0),
    };
    let mut demo = DemoScene::new(main_mesh, &settings);

    let cancel = CancelToken::new();
    if let Some(ms) = settings.deadline_ms {
        let token = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(ms));
            token.cancel();
        });
    }

    log::info!(
        "Rendering {} frame(s) at {}x{} into {}",
        settings.frames,
        settings.width,
        settings.height,
        args.output.display()
    );

    let start = Instant::now();
    let mut pixels = vec![0u32; settings.width * settings.height];
    let mut written = 0;
    for frame in 0..settings.frames {
        let outcome = render(
            &demo.scene,
            &demo.camera,
            &mut pixels,
            settings.width,
            settings.height,
            settings.parallel,
            &cancel,
        );
        if outcome == RenderOutcome::Cancelled {
            log::warn!("Deadline reached during frame {frame}, stopping");
            break;
        }

        let path = args.output.join(output::frame_name(frame));
        output::save_png(&path, &pixels, settings.width, settings.height)?;
        written += 1;

        demo.advance()?;
    }

    log::info!("Wrote {} frame(s) in {:.2?}", written, start.elapsed());
    Ok(())
}
