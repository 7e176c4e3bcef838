pub mod config;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod render;
pub mod state;
pub mod storage;
pub mod surface;
pub use error::{AppError, AppResult};

use std::path::{Path, PathBuf};

use config::AppConfig;
use editor::{EditorSession, ReplayReport, SessionOptions};
use storage::StorageService;

const USAGE: &str = "sketchpad <script.json> [output.png]";

/// Entrypoint used by the CLI binary.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting sketchpad");

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let report = run_with_args(&args, &config::load_app_config())?;

    tracing::info!(
        steps = report.steps,
        saved = report.saved.len(),
        "replay complete"
    );
    Ok(())
}

/// Replays the script named by `args[0]` and writes the final canvas to `args[1]` when given.
pub fn run_with_args(args: &[String], config: &AppConfig) -> AppResult<ReplayReport> {
    let (script_path, output) = match args {
        [script] => (PathBuf::from(script), None),
        [script, output] => (PathBuf::from(script), Some(PathBuf::from(output))),
        _ => return Err(AppError::Usage(USAGE.to_string())),
    };

    let script = input::load_script(&script_path)?;
    let width = script.width.unwrap_or(config.canvas_width);
    let height = script.height.unwrap_or(config.canvas_height);
    if !surface::surface_fits(width, height) {
        return Err(AppError::CanvasTooLarge {
            width,
            height,
            max: surface::MAX_SURFACE_PIXELS,
        });
    }
    let mut session = EditorSession::new(width, height, SessionOptions::from_config(config));

    let storage = StorageService::from_config(config)?;
    let report = editor::replay(&script, &mut session, &storage, &config.export_file_name)?;

    if let Some(output) = output {
        write_output(&session, &output)?;
    }
    Ok(report)
}

fn write_output(session: &EditorSession, output: &Path) -> AppResult<()> {
    storage::export_png(&session.composited(), output)?;
    tracing::info!(path = %output.display(), "wrote final canvas");
    Ok(())
}
