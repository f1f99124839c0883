use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use graphdefang_gallery::cli::{run_list, run_render, ListOptions};
use graphdefang_gallery::config::{GalleryConfig, ServerConfig, DEFAULT_PORT, OUTPUT_DIR_ENV, PORT_ENV};
use graphdefang_gallery::gallery::SCRIPT_NAME;
use graphdefang_gallery::logging::{init_logging, LOG_ENV};
use graphdefang_gallery::serve::run_serve;

#[derive(Parser)]
#[command(name = "graphdefang-gallery")]
#[command(about = "Web gallery for GraphDefang graph images")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the gallery page and the graph images over HTTP
    Serve {
        /// Directory the graphs are written to
        #[arg(long, env = OUTPUT_DIR_ENV)]
        dir: PathBuf,
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0")]
        bind: IpAddr,
        /// Port to listen on
        #[arg(long, env = PORT_ENV, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// List the graphs matching a view
    List {
        /// Directory the graphs are written to
        #[arg(long, env = OUTPUT_DIR_ENV)]
        dir: PathBuf,
        /// View to filter by (defaults to hourly)
        #[arg(long)]
        view: Option<String>,
    },
    /// Render the gallery page for a view as static HTML
    Render {
        /// Directory the graphs are written to
        #[arg(long, env = OUTPUT_DIR_ENV)]
        dir: PathBuf,
        /// View to render (defaults to hourly)
        #[arg(long)]
        view: Option<String>,
        /// Write the page here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Page the view links point at
        #[arg(long, default_value = SCRIPT_NAME)]
        page: String,
    },
}

fn main() -> Result<()> {
    // Initialize logging - guard must be held for logs to flush
    let _guard = init_logging().ok();
    let verbose = std::env::var(LOG_ENV).is_ok();
    let start = Instant::now();

    let cli = Cli::parse();

    let result = run_command(cli);

    if verbose {
        let elapsed = start.elapsed();
        eprintln!("Completed in {:.2?}", elapsed);
    }

    result
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve { dir, bind, port } => {
            let config = GalleryConfig::from_dir(&dir)
                .with_context(|| format!("Cannot serve {}", dir.display()))?;
            run_serve(config, ServerConfig { bind, port })?;
        }
        Commands::List { dir, view } => {
            let items = run_list(&dir, ListOptions { view })?;
            for item in &items {
                println!("{}\t{}", item.filename, item.suffix);
            }
            println!("{} graphs", items.len());
        }
        Commands::Render {
            dir,
            view,
            output,
            page,
        } => {
            let html = run_render(&dir, view.as_deref(), &page)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{}", html),
            }
        }
    }

    Ok(())
}
