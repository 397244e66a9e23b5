use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use compkit::app::App;
use compkit::catalog::Catalog;
use compkit::config::Config;
use compkit::logging;
use compkit::navigation::{Location, RequestParams};
use compkit::presentation::{overview, present, present_detail, sidebar, DetailStatus};
use compkit::rest::dto::{CategoryResponse, DetailResponse, PageResponse};
use compkit::rest::{self, ApiDoc, ApiState};
use compkit::selection::SelectionController;

#[derive(Parser)]
#[command(name = "compkit")]
#[command(about = "Browse the catalog of copy-pasteable backend components")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Category to open the browser on
    #[arg(long)]
    component: Option<String>,

    /// Initial search text for the browser
    #[arg(short, long)]
    query: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the components of a category, optionally filtered
    List {
        /// Category id (default: first category)
        #[arg(long)]
        component: Option<String>,

        /// Search text matched against name, description, and tags
        #[arg(short, long)]
        query: Option<String>,

        /// Print the rendered page as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all categories with component counts
    Categories {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the detail page for one component
    Show {
        /// Category id
        category: String,

        /// Component id
        id: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start the REST API server
    Api {
        /// Port to listen on (default: 7009)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the OpenAPI document for the REST API
    Openapi,

    /// Print the effective configuration as TOML
    Config {
        /// Also save it to .compkit/config.toml
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    let is_tui_mode = cli.command.is_none();

    // Keep the guard alive so buffered log lines are flushed on exit
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    let catalog = Arc::new(Catalog::load(&config)?);

    match cli.command {
        Some(Commands::List {
            component,
            query,
            json,
        }) => {
            cmd_list(&catalog, component, query, json)?;
        }
        Some(Commands::Categories { json }) => {
            cmd_categories(&catalog, json)?;
        }
        Some(Commands::Show { category, id, json }) => {
            cmd_show(&catalog, &category, &id, json)?;
        }
        Some(Commands::Api { port }) => {
            cmd_api(config, catalog, port).await?;
        }
        Some(Commands::Openapi) => {
            println!("{}", ApiDoc::json()?);
        }
        Some(Commands::Config { write }) => {
            cmd_config(&config, write)?;
        }
        None => {
            let start =
                App::start_location(&config, cli.component.as_deref(), cli.query.as_deref());
            run_tui(config, catalog, start, logging_handle.log_file_path).await?;
        }
    }

    Ok(())
}

async fn run_tui(
    config: Config,
    catalog: Arc<Catalog>,
    start: Location,
    log_file_path: Option<PathBuf>,
) -> Result<()> {
    let mut app = App::new(config, catalog, start);
    let result = app.run().await;

    // Print session log path if it has content
    if let Some(log_path) = log_file_path {
        if let Ok(metadata) = log_path.metadata() {
            if metadata.len() > 0 {
                eprintln!("Session log: {}", log_path.display());
            }
        }
    }

    result
}

fn cmd_list(
    catalog: &Arc<Catalog>,
    component: Option<String>,
    query: Option<String>,
    json: bool,
) -> Result<()> {
    let navigator = RequestParams::new(component.clone());
    let mut controller = SelectionController::new(Arc::clone(catalog));
    controller.mount_from(&navigator);
    controller.set_query(query.unwrap_or_default());

    let Some(selection) = controller.state() else {
        bail!("Selection was not initialized");
    };

    let corrected = component
        .as_deref()
        .is_some_and(|requested| requested != selection.active_category);
    if corrected {
        eprintln!(
            "Unknown category '{}', showing '{}'",
            component.unwrap_or_default(),
            selection.active_category
        );
    }

    let view = present(catalog, &selection);

    if json {
        let page = PageResponse::from_view(
            &view,
            sidebar(catalog, &selection.active_category),
            corrected,
        );
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    println!("{} ({}/{})", view.title, view.visible.len(), view.total());
    println!("{}", view.subtitle);
    println!("{}", "─".repeat(60));

    if let Some(message) = view.empty_message() {
        println!("{}", message);
        return Ok(());
    }

    for card in view.cards() {
        let marker = if card.has_detail { "●" } else { "○" };
        println!("{} {} [{}]", marker, card.name, card.id);
        println!("    {}", card.description);
        println!("    {}", card.tag_line);
    }

    Ok(())
}

fn cmd_categories(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        let categories: Vec<CategoryResponse> = overview(catalog)
            .into_iter()
            .zip(catalog.categories())
            .map(|(tile, category)| CategoryResponse::from_tile(tile, category))
            .collect();
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    println!("Categories ({})", catalog.categories().len());
    println!("{}", "─".repeat(60));

    for tile in overview(catalog) {
        println!("{:<14} {:<22} {:>2} components", tile.id, tile.name, tile.count);
        println!("    {}", tile.summary);
    }

    Ok(())
}

fn cmd_show(catalog: &Catalog, category: &str, id: &str, json: bool) -> Result<()> {
    let Some(view) = present_detail(catalog, category, id) else {
        bail!("No component '{}' in category '{}'", id, category);
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&DetailResponse::from(&view))?
        );
        return Ok(());
    }

    println!("{}", view.breadcrumb.join(" / "));
    println!("{}", "─".repeat(60));
    println!("{}", view.record.name);
    println!("{}", view.summary());
    println!("{}", view.record.tags.join(" · "));
    println!();

    match view.status {
        DetailStatus::Available(detail) => {
            println!("Installation:");
            println!("  $ {}", detail.install);
            println!();
            println!("Code:");
            for tab in &detail.tabs {
                println!("  • {}", tab.label);
            }
            println!();
            println!("{}:", detail.reference.label);
            for line in &detail.reference.lines {
                println!("  {}", line);
            }
        }
        DetailStatus::ComingSoon => {
            println!("Coming soon");
        }
    }

    println!();
    println!("Back: {}", view.back_href);

    Ok(())
}

fn cmd_config(config: &Config, write: bool) -> Result<()> {
    print!("{}", config.to_toml()?);

    if write {
        let path = config.save()?;
        eprintln!("Saved {}", path.display());
    }

    Ok(())
}

async fn cmd_api(config: Config, catalog: Arc<Catalog>, port: Option<u16>) -> Result<()> {
    let port = port.unwrap_or(config.rest_api.port);
    let state = ApiState::new(catalog, config);

    println!("Starting compkit REST API on http://localhost:{}", port);
    println!("Health check: http://localhost:{}/api/v1/health", port);
    println!("Components: http://localhost:{}/api/v1/components", port);

    rest::serve(state, port).await
}
