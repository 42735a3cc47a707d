use std::fs;
use std::path::PathBuf;

use albion_market::config::{self, Server};
use albion_market::queries::{build_query, classify, filter};
use albion_market::render::{html, text};
use albion_market::source::DocumentSource;
use albion_market::{MarketSdk, OutputArea, RenderMode};
use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "price-board", about = "Albion Online market prices by item and city")]
struct Cli {
    /// Items document (path or http(s) URL)
    #[arg(long)]
    items: Option<String>,

    /// World document (path or http(s) URL)
    #[arg(long)]
    world: Option<String>,

    /// Data project server: west, east or europe
    #[arg(long, default_value = "west")]
    server: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search selectable items by name
    Search {
        term: String,
    },
    /// List the selectable market hubs
    Cities,
    /// Fetch and render current prices
    Prices {
        /// Item ids, comma-separated
        #[arg(long, value_delimiter = ',', required = true)]
        items: Vec<String>,
        /// Cities, comma-separated (defaults to every hub)
        #[arg(long, value_delimiter = ',')]
        cities: Vec<String>,
        /// Quality codes 1-5, comma-separated (defaults to all)
        #[arg(long, value_delimiter = ',')]
        qualities: Vec<u8>,
        /// Group by item and quality instead of a flat table
        #[arg(long)]
        cards: bool,
        /// Write HTML to this file instead of printing text
        #[arg(long)]
        html: Option<PathBuf>,
    },
}

fn source(spec: Option<&str>, file: &str) -> DocumentSource {
    match spec {
        Some(s) => DocumentSource::parse(s),
        None => DocumentSource::Path(config::default_reference_dir().join(file)),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let server = Server::from_name(&cli.server)
        .ok_or_else(|| anyhow!("unknown server '{}'", cli.server))?;
    let sdk = MarketSdk::builder().server(server).build();
    let mut output = OutputArea::new();
    let refs = sdk.load_references(
        &source(cli.items.as_deref(), config::ITEMS_FILE),
        &source(cli.world.as_deref(), config::WORLD_FILE),
        &mut output,
    );
    if output.has_errors() {
        eprintln!("{}", text::to_text(&output));
    }

    match cli.command {
        Command::Search { term } => {
            for (id, name) in filter(refs.items.selectable(), &term) {
                println!("{:<40} {:<12} {}", id, classify(&id).label(), name);
            }
        }
        Command::Cities => {
            for hub in refs.locations.options() {
                println!("{}", hub.display_name);
            }
        }
        Command::Prices {
            items,
            cities,
            qualities,
            cards,
            html: html_out,
        } => {
            let cities = if cities.is_empty() {
                refs.locations.options().iter().map(|l| l.id.clone()).collect()
            } else {
                cities
            };
            let qualities = if qualities.is_empty() {
                None
            } else {
                Some(qualities.as_slice())
            };
            let request = build_query(items.as_slice(), cities.as_slice(), qualities)?;
            let mode = if cards { RenderMode::Cards } else { RenderMode::Table };

            sdk.prices(&refs).show(&request, mode, &mut output);

            match html_out {
                Some(path) => {
                    fs::write(&path, html::to_html(&output))
                        .with_context(|| format!("writing {}", path.display()))?;
                    log::info!("Wrote {}", path.display());
                }
                None => println!("{}", text::to_text(&output)),
            }
        }
    }
    Ok(())
}
