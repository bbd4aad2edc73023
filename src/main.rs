use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};

use readable_expr::diagnostics::{RenderError, render_error};
use readable_expr::{Expr, Registry, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "readexpr", version, about = "Render expression trees as readable source text")]
struct Cli {
    /// TOML file overriding the rendering settings
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON-encoded expression tree
    Render {
        /// Tree file path, or `-` for stdin
        file: PathBuf,
        /// Write the rendering here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List every node kind and the translator that renders it
    Kinds,
}

/// Failure plus the settings source, when there is one to point into.
struct Failure {
    error: RenderError,
    source: Option<String>,
}

impl From<RenderError> for Failure {
    fn from(error: RenderError) -> Self {
        Self { error, source: None }
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings, Failure> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let source = std::fs::read_to_string(path).map_err(|e| {
        RenderError::settings(format!("could not read settings file: {e}"), None).with_path(path.to_path_buf())
    })?;
    Settings::from_toml_str(&source).map_err(|e| Failure {
        error: e.with_path(path.to_path_buf()),
        source: Some(source.clone()),
    })
}

fn read_tree(file: &Path) -> Result<Expr, RenderError> {
    let text = if file.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| RenderError::input(format!("could not read stdin: {e}")))?;
        text
    } else {
        std::fs::read_to_string(file)
            .map_err(|e| RenderError::input(format!("could not read {}: {e}", file.display())))?
    };
    serde_json::from_str(&text)
        .map_err(|e| RenderError::input(format!("{} is not a valid expression tree: {e}", file.display())))
}

fn run(cli: Cli) -> Result<(), Failure> {
    let settings = load_settings(cli.settings.as_deref())?;
    let registry = Registry::new(settings)?;

    match cli.command {
        Commands::Render { file, output } => {
            let tree = read_tree(&file)?;
            tracing::debug!(file = %file.display(), "rendering tree");
            let text = registry.translate(&tree)?;
            match output {
                Some(path) => std::fs::write(&path, format!("{text}\n")).map_err(|e| {
                    RenderError::input(format!("could not write {}: {e}", path.display()))
                })?,
                None => println!("{text}"),
            }
        }
        Commands::Kinds => {
            for (kind, translator) in registry.kinds() {
                println!("{kind:<24} {translator}");
            }
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    if let Err(failure) = run(cli) {
        render_error(failure.source.as_deref(), &failure.error);
        std::process::exit(1);
    }
}
