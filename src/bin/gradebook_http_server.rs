use clap::Parser;
use gradebook::graphql::schema_sdl;
use gradebook::{load_server_config, GradebookHttpServer, IntegrityMode};
use log::info;
use std::path::PathBuf;

/// Command line options for the HTTP server binary.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to the server configuration file
    #[arg(long)]
    config: Option<String>,

    /// Port for the HTTP server, overriding the configured one
    #[arg(long)]
    port: Option<u16>,

    /// Directory containing the seed JSON files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Accept dangling foreign keys and skip cascading deletes
    #[arg(long)]
    lenient: bool,

    /// Print the GraphQL schema in SDL form and exit
    #[arg(long)]
    print_schema: bool,
}

/// Main entry point for the gradebook HTTP server.
///
/// # Environment Variables
///
/// * `GRADEBOOK_CONFIG` - Path to the configuration file (default: config/gradebook.json)
/// * `RUST_LOG` - Log filter (default: info)
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_schema {
        println!("{}", schema_sdl());
        return Ok(());
    }

    gradebook::logging::init().ok();
    info!("Starting gradebook HTTP server...");

    let mut config = load_server_config(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    if cli.lenient {
        config = config.with_integrity(IntegrityMode::Lenient);
    }
    info!("Config loaded successfully");

    let http_server = GradebookHttpServer::from_config(&config)?;
    http_server.run().await?;

    Ok(())
}
