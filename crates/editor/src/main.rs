use std::path::{Path, PathBuf};

use aquascape_editor_lib::catalog::CatalogMap;
use aquascape_editor_lib::command::execute_json_batch;
use aquascape_editor_lib::error::{CommandError, PersistenceError};
use aquascape_editor_lib::harness::EditorHarness;
use aquascape_editor_lib::state::{EditorSettings, EditorStore};
use clap::Parser;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{path}: {source}")]
    File {
        path: PathBuf,
        source: PersistenceError,
    },
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

#[derive(Parser, Debug)]
#[command(name = "aquascape-editor", about = "Headless aquascape scene editor")]
struct Cli {
    /// Scene file to load (versioned envelope or bare object array)
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Start from the last autosave when no scene file is given
    #[arg(long)]
    resume: bool,

    /// JSON array of editor commands to replay
    #[arg(long)]
    script: Option<PathBuf>,

    /// Asset catalog (JSON array of asset definitions)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write the resulting scene here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also write the resulting scene to the autosave file
    #[arg(long)]
    autosave: bool,
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::File {
        path: path.to_path_buf(),
        source: e.into(),
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut harness = EditorHarness::with_settings(EditorSettings::load());

    if let Some(path) = &cli.catalog {
        harness.catalog = CatalogMap::load(path).map_err(|source| CliError::File {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Loaded {} assets from {}", harness.catalog.len(), path.display());
    }

    if let Some(path) = &cli.scene {
        let count = harness.load_scene_json(&read_file(path)?);
        tracing::info!("Loaded scene from {} ({count} objects)", path.display());
    } else if cli.resume {
        if !EditorStore::has_autosave() {
            tracing::warn!("No autosave to resume from");
        } else if let Some(objects) = EditorStore::load_autosave() {
            harness.store.set_objects(objects);
            tracing::info!("Resumed autosave ({} objects)", harness.object_count());
        } else {
            tracing::warn!("Autosave could not be read");
        }
    }

    if let Some(path) = &cli.script {
        let responses = execute_json_batch(&mut harness, &read_file(path)?)?;
        let failed = responses.iter().filter(|r| !r.success).count();
        for (i, resp) in responses.iter().enumerate() {
            match &resp.error {
                Some(error) => tracing::warn!("Command {i} failed: {error}"),
                None => tracing::debug!("Command {i}: {:?}", resp.data),
            }
        }
        tracing::info!(
            "Ran {} commands ({failed} failed), {} undo entries",
            responses.len(),
            harness.store.undo_len()
        );
    }

    let scene = harness.export_scene_json();
    match &cli.out {
        Some(path) => {
            std::fs::write(path, &scene).map_err(|e| CliError::File {
                path: path.clone(),
                source: e.into(),
            })?;
            tracing::info!("Wrote {} objects to {}", harness.object_count(), path.display());
        }
        None => println!("{scene}"),
    }

    if cli.autosave {
        harness.store.autosave()?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aquascape_editor=info,aquascape_editor_lib=info".into()),
        )
        .init();

    if let Err(e) = run(Cli::parse()) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
