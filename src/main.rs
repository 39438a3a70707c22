use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mobility_gallery::{render_document, render_page, visuals, StaticImageProvider};

#[derive(Parser)]
#[command(name = "mobility-gallery", version, about = "Render the Economic Mobility gallery page")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the gallery page as HTML
    Render {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Emit only the <main> fragment, without the document shell
        #[arg(long)]
        fragment: bool,
    },
    /// Inspect the shipped visual catalog
    Catalog {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Render { out, fragment } => {
            let html = if fragment {
                render_page(visuals(), &StaticImageProvider)?.to_html()
            } else {
                render_document(visuals(), &StaticImageProvider)?
            };
            match out {
                Some(path) => {
                    fs::write(&path, &html)?;
                    log::info!("wrote {} bytes to {}", html.len(), path.display());
                }
                None => print!("{html}"),
            }
        }
        Command::Catalog { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(visuals())?);
            } else {
                for visual in visuals() {
                    println!("{:<12} {:<30} {}", visual.id, visual.title, visual.subtitle);
                }
            }
        }
    }
    Ok(())
}
