use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::catalog::{
    Catalog,
    error::CatalogError,
    query::{QuerySpec, SortOrder},
    routes::RoutePath,
};
use crate::config;
use crate::domain::{
    facet::{Facet, FacetKind, Genre, Mood},
    slug::encode_facet,
    track::Track,
};
use crate::store::TrackStore;

#[derive(Parser)]
#[command(name = "tunedeck")]
#[command(version = "0.1")]
#[command(about = "Browsable catalog of indie music tracks")]
pub struct Cli {
    /// Path to the config TOML file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run http server hosting the catalog
    Serve,
    /// List tracks matching a search and facet filters
    List {
        /// Case-insensitive substring of the title or artist
        #[arg(short, long, default_value = "")]
        search: String,
        /// Genre name, may be repeated
        #[arg(short, long)]
        genre: Vec<String>,
        /// Mood name, may be repeated
        #[arg(short, long)]
        mood: Vec<String>,
        /// newest or alphabetical
        #[arg(long, default_value = "newest")]
        sort: SortOrder,
    },
    /// Show a single track by its slug
    Show { slug: String },
    /// Show genres and moods with their track counts
    Facets,
    /// Print every page that must be generated, as JSON
    Routes {
        /// Print absolute urls using public_endpoint.base_url
        #[arg(short, long)]
        absolute: bool,
    },
}

fn load_catalog(source: &config::CatalogSource) -> anyhow::Result<Catalog> {
    let store = TrackStore::load(&source.path).with_context(|| {
        format!(
            "Failed to load tracks from {}",
            source.path.to_string_lossy()
        )
    })?;
    Ok(Catalog::build(store)?)
}

fn parse_facets<F: Facet>(names: &[String]) -> anyhow::Result<Vec<F>> {
    names
        .iter()
        .map(|name| F::from_name(name).ok_or_else(|| anyhow!("unknown facet value '{name}'")))
        .collect()
}

fn print_track(track: &Track) {
    println!(
        "{} - {} ({}) [{} / {}]  {}",
        track.artist,
        track.title,
        track.release_year,
        track.genre,
        track.mood,
        track.slug
    );
}

/// Entrypoint for CLI
pub fn run() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let cfg = config::Config::load(&cli.config)?;

    match cli.command {
        Commands::Serve => {
            let catalog = load_catalog(&cfg.catalog)?;
            let http_server = crate::http::server::HttpServer::new(catalog, cfg.http);

            println!(
                "HTTP server running at http://{}:{}",
                http_server.config.bind_addr, http_server.config.port
            );
            http_server.run();
        }

        Commands::List {
            search,
            genre,
            mood,
            sort,
        } => {
            let catalog = load_catalog(&cfg.catalog)?;

            let mut spec = QuerySpec::new().search(search).sort(sort);
            spec.include_genres = parse_facets::<Genre>(&genre)?.into_iter().collect();
            spec.include_moods = parse_facets::<Mood>(&mood)?.into_iter().collect();

            let tracks = catalog.listing(&spec);
            println!(
                "Showing {} of {} tracks",
                tracks.len(),
                catalog.tracks().len()
            );
            for track in tracks {
                print_track(track);
            }
        }

        Commands::Show { slug } => {
            let catalog = load_catalog(&cfg.catalog)?;

            match catalog.detail(&slug) {
                Ok(track) => {
                    print_track(track);
                    println!("  {}", track.mood.tagline());
                    println!("  cover: {}", track.cover_image);
                    println!("  link:  {}", track.external_link);
                    println!("  page:  {}", Catalog::track_route(track).path());
                }
                Err(CatalogError::TrackNotFound(slug)) => {
                    println!("No track with slug '{slug}'");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Facets => {
            let catalog = load_catalog(&cfg.catalog)?;

            println!("Genres:");
            for (genre, count) in catalog.genre_counts() {
                let route = RoutePath::facet(FacetKind::Genre, encode_facet(genre.name()));
                println!("  {genre:<12} {count:>3}  {}", route.path());
            }
            println!("Moods:");
            for (mood, count) in catalog.mood_counts() {
                let route = RoutePath::facet(FacetKind::Mood, encode_facet(mood.name()));
                println!("  {mood:<12} {count:>3}  {}", route.path());
            }
        }

        Commands::Routes { absolute } => {
            let catalog = load_catalog(&cfg.catalog)?;
            let manifest = catalog.all_routes();

            if absolute {
                let endpoint = cfg
                    .public_endpoint
                    .as_ref()
                    .context("public_endpoint.base_url is required for absolute urls")?;
                for route in manifest.paths() {
                    println!("{}", crate::public_endpoint::page_url(endpoint, &route));
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&manifest)?);
            }
        }
    }

    Ok(())
}
