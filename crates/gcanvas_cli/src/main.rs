//! gcanvas CLI
//!
//! Render scene files to PNG and inspect their contents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gcanvas::{GCanvas, ImageStore};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod scene;

use scene::SceneFile;

#[derive(Parser)]
#[command(name = "gcanvas")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render gcanvas scene files", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a scene to a PNG file
    Render {
        /// Scene file (TOML)
        scene: PathBuf,

        /// Output PNG path
        #[arg(short, long, default_value = "out.png")]
        output: PathBuf,

        /// Advance sprites this many ticks before rendering
        #[arg(short, long, default_value = "0")]
        frames: u32,
    },

    /// List the objects in a scene
    Info {
        /// Scene file (TOML)
        scene: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Render {
            scene,
            output,
            frames,
        } => cmd_render(&scene, &output, frames),

        Commands::Info { scene } => cmd_info(&scene),
    }
}

fn load(path: &Path, store: &mut ImageStore) -> Result<GCanvas> {
    let scene = SceneFile::load(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    scene.build(base_dir, store)
}

fn cmd_render(path: &Path, output: &Path, frames: u32) -> Result<()> {
    let mut store = ImageStore::new();
    let mut canvas = load(path, &mut store)?;

    for _ in 0..frames {
        canvas.update_sprites();
    }
    if frames > 0 {
        let elapsed = canvas.config().frame_interval() * frames;
        info!("Advanced {} frames ({:.2}s of animation)", frames, elapsed.as_secs_f32());
    }

    let raster = canvas.render(&store)?;
    raster
        .save_png(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if raster.skipped_text() > 0 {
        info!("{} label(s) were laid out but not drawn", raster.skipped_text());
    }
    info!(
        "Rendered {} ({}x{}) to {}",
        path.display(),
        raster.width(),
        raster.height(),
        output.display()
    );
    Ok(())
}

fn cmd_info(path: &Path) -> Result<()> {
    let mut store = ImageStore::new();
    let canvas = load(path, &mut store)?;

    println!("Scene: {}", path.display());
    println!(
        "Canvas: {}x{} background {}",
        canvas.width(),
        canvas.height(),
        canvas.background()
    );
    println!("Objects: {}", canvas.element_count());
    for index in 0..canvas.element_count() {
        let id = canvas.element(index)?;
        let Some(object) = canvas.object(id) else {
            continue;
        };
        let b = canvas.bounds(id)?;
        println!(
            "  {:>3}  {:<10} x={:.1} y={:.1} w={:.1} h={:.1}{}",
            index,
            object.kind().to_string(),
            b.x(),
            b.y(),
            b.width(),
            b.height(),
            if object.is_visible() { "" } else { " (hidden)" }
        );
    }
    Ok(())
}
