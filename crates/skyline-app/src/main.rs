mod cli;
mod report;
mod session;

use std::process::ExitCode;

use skyline_config::schema::EngineConfig;
use skyline_level::{load_level, save_level};
use skyline_objects::{EditorContext, ObjectFactory, Sector};
use skyline_renderer::Canvas;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::report::RunReport;
use crate::session::FramePlan;

fn init_logging(args: &cli::Args, config: &EngineConfig) {
    let configured = format!("skyline={}", config.logging.level.as_directive());
    let log_directive = args.log_level.as_deref().unwrap_or(&configured);
    let directive: Directive = log_directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log level '{log_directive}', using info");
        LevelFilter::INFO.into()
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn load_config(args: &cli::Args) -> (EngineConfig, Option<String>) {
    let loaded = match args.config {
        Some(ref path) => skyline_config::load_config_from(path),
        None => skyline_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (EngineConfig::default(), Some(e.to_string())),
    }
}

fn run(args: &cli::Args, config: &EngineConfig) -> skyline_common::Result<()> {
    let screen = config.display.screen_size();
    let level = load_level(&args.level)?;
    let mut sector = Sector::from_level(&level, &ObjectFactory::default(), screen)?;
    tracing::info!(
        sector = sector.name(),
        objects = sector.objects().len(),
        "level loaded from {}",
        args.level.display()
    );

    let mut canvas = Canvas::new(screen);
    if let Some(size) = args.resize {
        session::resize(&mut sector, &mut canvas, size);
    }

    let plan = FramePlan {
        frames: args.frames.unwrap_or(config.run.frames),
        frame_time: config.run.frame_time as f32,
        camera_speed: config.run.camera_speed as f32,
    };
    let frames = session::run_frames(&mut sector, &mut canvas, plan);

    let report = RunReport {
        level: args.level.display().to_string(),
        sector: sector.name().to_string(),
        screen: canvas.screen(),
        frames,
    };
    if args.json {
        println!("{}", report.to_json());
    } else {
        print!("{}", report.to_text());
    }

    if let Some(ref path) = args.save {
        let editor = editor_context(args, config);
        let saved = sector.save(&editor);
        save_level(&saved, path)?;
        tracing::info!(objects = saved.objects.len(), "level saved to {}", path.display());
    }

    Ok(())
}

/// Flags add to the `[editor]` config section. `--worldmap` also turns the
/// editor on; the config section must set `active` itself.
fn editor_context(args: &cli::Args, config: &EngineConfig) -> EditorContext {
    let worldmap_mode = args.worldmap || config.editor.worldmap_mode;
    let active = args.editor || args.worldmap || config.editor.active;
    EditorContext::new(active, worldmap_mode)
}

fn main() -> ExitCode {
    let args = cli::parse();

    let (config, config_error) = load_config(&args);
    init_logging(&args, &config);

    tracing::info!("Skyline v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
