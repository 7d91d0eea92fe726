//! `vineapp` command line interface.

mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use shared::{
    get_application_info, DatabaseConfig, FiberyClient, FiberyConfig, FiberyInfo, KnowledgeBase,
    PageRequest, ProductRepository,
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vineapp", about = "Serra Vine CLI application", version)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Display information about vineapp.
    About,
    /// List products. Without paging options all products are printed.
    Products {
        #[arg(long)]
        page: Option<i64>,
        #[arg(long)]
        per_page: Option<i64>,
        /// Column to sort on (id, name, product_group_id, product_group_name)
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        descending: bool,
        /// Case-insensitive substring of the name or group name
        #[arg(long)]
        filter: Option<String>,
    },
    /// List the databases of the configured Fibery space.
    Kb,
    /// Show the schema and sample entities of a Fibery database.
    Database { name: String },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn knowledge_base() -> Result<KnowledgeBase> {
    let config = FiberyConfig::from_env()?;
    let client = FiberyClient::from_config(&config)?;
    Ok(KnowledgeBase::new(client, FiberyInfo::from_config(&config)))
}

async fn run(command: Command) -> Result<String> {
    match command {
        Command::About => Ok(output::about(&get_application_info())),
        Command::Products {
            page,
            per_page,
            sort,
            descending,
            filter,
        } => {
            let repository = ProductRepository::connect(&DatabaseConfig::from_env()?).await?;
            let paged = page.is_some()
                || per_page.is_some()
                || sort.is_some()
                || descending
                || filter.is_some();
            debug!(paged, "Listing products");

            if !paged {
                let products = repository.get_all().await?;
                return Ok(output::products(&products));
            }

            let defaults = PageRequest::default();
            let request = PageRequest {
                page: page.unwrap_or(defaults.page),
                items_per_page: per_page.unwrap_or(defaults.items_per_page),
                sort_by: sort,
                descending,
                filter_text: filter,
            };
            let page = repository.get_paginated(&request).await?;
            Ok(output::product_page(&page))
        }
        Command::Kb => {
            let databases = knowledge_base()?.list_databases().await?;
            Ok(output::databases(&databases))
        }
        Command::Database { name } => {
            debug!(database = %name, "Resolving Fibery database");
            let kb = knowledge_base()?;
            let schema = kb.schema(&name).await?;
            // the schema is still printed when the entity lookup fails
            let entities = kb.sample_entities(&name).await;
            if let Err(e) = &entities {
                warn!(database = %name, error = %e, "Failed to load Fibery entities");
            }
            Ok(output::database(&schema, &entities))
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command).await {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
