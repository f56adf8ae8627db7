//! Desktop viewer for Multiverse Atlas: the macroquad entry point.
//!
//! Parses the command line, loads the world catalog and runs the screen
//! stack until the last screen is popped.

use std::path::{Path, PathBuf};

use clap::Parser;
use macroquad::prelude::{Conf, next_frame};
use mw_core::{MwResult, WorldCatalog};
use mw_graph::ForceConfig;
use mw_gui::app::AppState;
use mw_gui::screen::{Screen, ScreenId, Transition, make_screen};
use mw_hexmap::MapConfig;

#[derive(Parser)]
#[command(
    name = "mw-gui",
    about = "Hex maps and timeline graphs of fictional worlds",
    version
)]
struct Args {
    /// World to show first (defaults to the first world of the catalog)
    #[arg(long)]
    world: Option<String>,

    /// JSON world catalog to load instead of the bundled one
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Start on a specific view (map, graph)
    #[arg(long, default_value = "map")]
    view: String,

    /// RNG seed for graph spawn angles and growth
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Rings of hexes around the origin
    #[arg(long)]
    map_radius: Option<i32>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Multiverse Atlas".to_owned(),
        window_width: 1280,
        window_height: 800,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Load the catalog at `path`, falling back to the bundled worlds.
fn load_catalog(path: Option<&Path>) -> MwResult<WorldCatalog> {
    if let Some(path) = path {
        match WorldCatalog::from_path(path) {
            Ok(catalog) => return Ok(catalog),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "using bundled worlds");
            }
        }
    }
    AppState::bundled_catalog()
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let catalog = match load_catalog(args.catalog.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "no usable world catalog");
            return;
        }
    };
    tracing::info!(worlds = catalog.len(), "catalog loaded");

    let mut map_config = MapConfig::default();
    if let Some(radius) = args.map_radius {
        map_config = map_config.with_map_radius(radius);
    }
    let force_config = ForceConfig::default().with_seed(args.seed);

    let mut app = match AppState::new(catalog, args.world.as_deref(), map_config, force_config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "cannot open world");
            return;
        }
    };

    let start = ScreenId::from_name(&args.view).unwrap_or_else(|| {
        tracing::warn!(view = %args.view, "unknown view, showing the map");
        ScreenId::Map
    });

    // Screen stack
    let mut screens: Vec<Box<dyn Screen>> = vec![make_screen(start, &app)];

    loop {
        if let Some(screen) = screens.last_mut() {
            match screen.update(&mut app) {
                Transition::Pop => {
                    screens.pop();
                }
                Transition::Replace(id) => {
                    screens.pop();
                    screens.push(make_screen(id, &app));
                }
                Transition::None => {}
            }
        }

        // Draw the current top screen (may have changed after transition)
        if let Some(screen) = screens.last() {
            screen.draw(&app);
        }

        if app.should_quit || screens.is_empty() {
            break;
        }

        next_frame().await;
    }
}
