use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod engine;
mod texture_loader;

use showcase::constants::*;
use showcase::{Page, PageConfig};

use crate::engine::PageEngine;
use crate::texture_loader::load_slide_textures;

/// Portfolio page with carousels, scroll spy and a contact form.
#[derive(Parser, Debug)]
#[command(name = "showcase", version)]
struct Args {
    /// Show the images of this directory in the projects carousel
    image_directory: Option<PathBuf>,

    /// Page description (TOML). The built-in page is used when omitted.
    #[arg(long, env = "SHOWCASE_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // --- Describe the Page ---
    let mut config = match &args.config {
        Some(path) => PageConfig::load(path)
            .with_context(|| format!("failed to load page config {}", path.display()))?,
        None => PageConfig::default(),
    };
    if let Some(dir) = args.image_directory.clone() {
        config = config.with_image_directory(dir);
    }
    config.resolve_images().context("failed to collect carousel images")?;

    let mut page = Page::from_config(&config, args.height as f32)?;
    info!(
        title = page.title(),
        sections = page.sections().len(),
        carousels = page.carousels().len(),
        "page ready"
    );

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(page.title())
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape blurs form fields and closes the menu instead of quitting
    rl.set_exit_key(None);

    // --- Load Slides ---
    let textures = load_slide_textures(&mut rl, &thread, &page);
    info!(loaded = textures.len(), "slide textures loaded");

    page.handle(showcase::PageEvent::Resize {
        viewport_height: rl.get_screen_height() as f32,
    });
    let mut engine = PageEngine::new(page, textures);

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = FRAME_TIME;

        engine.handle_input(&mut rl);
        engine.update(dt);

        let mut d = rl.begin_drawing(&thread);
        engine.draw(&mut d);
    }

    info!("window closed");
    Ok(())
}
