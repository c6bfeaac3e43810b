//! sitelink — resolve content items to public URLs.
//!
//! # Architecture Overview
//!
//! ```text
//!   sites.toml ──▶ config ──▶ SiteRegistry ──▶ ResolvingTableCache
//!                    │                               │
//!                    ▼                               ▼
//!   item path ──▶ LinkProvider ──▶ SiteResolver ──▶ LinkBuilder ──▶ URL
//!                    ▲
//!   request args ────┘ (RequestInfo: host, scheme, port, site, language)
//! ```

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use sitelink::config::{load_config, watcher::ConfigWatcher, LinkConfig};
use sitelink::content::ContentNode;
use sitelink::context::RequestInfo;
use sitelink::links::{LanguageEmbedding, LanguageLocation, LinkProvider, UrlOptions};
use sitelink::observability::logging;

#[derive(Parser)]
#[command(name = "sitelink")]
#[command(about = "Resolve content items to site-aware URLs", long_about = None)]
struct Cli {
    /// Site configuration file.
    #[arg(short, long, default_value = "sites.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the URL of a content item
    Url {
        /// Full content path of the item
        path: String,
        #[command(flatten)]
        request: RequestArgs,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Show the site a content item resolves to
    Site {
        /// Full content path of the item
        path: String,
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Dump the site resolving table
    Table {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the configuration file
    Check,
    /// Watch the configuration file and rebuild the table on change
    Watch,
}

#[derive(Args)]
struct RequestArgs {
    /// Item language
    #[arg(short, long, default_value = "en")]
    language: String,
    /// Item database
    #[arg(long, default_value = "master")]
    database: String,
    /// Current request host
    #[arg(long, default_value = "localhost")]
    host: String,
    /// Current request scheme
    #[arg(long, default_value = "http")]
    scheme: String,
    /// Current request port
    #[arg(long, default_value_t = 80)]
    port: u16,
    /// Name of the site serving the current request
    #[arg(long)]
    current_site: Option<String>,
}

#[derive(Args)]
struct OptionArgs {
    /// Language embedding mode
    #[arg(long, value_enum)]
    embed: Option<EmbedArg>,
    /// Put the language into the query string instead of the path
    #[arg(long)]
    query_string: bool,
    /// Always include scheme and host
    #[arg(long)]
    server_url: bool,
    /// Build the path from display names
    #[arg(long)]
    display_name: bool,
    /// Percent-encode path segments
    #[arg(long)]
    encode: bool,
    /// Leave out the .aspx extension
    #[arg(long)]
    no_extension: bool,
    /// Link through this site instead of resolving one
    #[arg(long)]
    site: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum EmbedArg {
    Always,
    Never,
    AsNeeded,
}

impl From<EmbedArg> for LanguageEmbedding {
    fn from(arg: EmbedArg) -> Self {
        match arg {
            EmbedArg::Always => LanguageEmbedding::Always,
            EmbedArg::Never => LanguageEmbedding::Never,
            EmbedArg::AsNeeded => LanguageEmbedding::AsNeeded,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    logging::init(&config.observability.log_level);

    tracing::debug!(
        path = ?cli.config,
        sites = config.sites.len(),
        items = config.items.len(),
        "Configuration loaded"
    );

    let provider = LinkProvider::from_config(&config);

    match cli.command {
        Commands::Url { path, request, options } => {
            let node = find_node(&config, &path, &request);
            let ctx = request_info(&provider, &request);
            let options = url_options(&provider, options)?;
            println!("{}", provider.get_item_url_with(&node, &options, &ctx));
        }
        Commands::Site { path, request } => {
            let node = find_node(&config, &path, &request);
            let ctx = request_info(&provider, &request);
            match provider.get_target_site(&node, &ctx) {
                Some(site) => println!("{}", site.name),
                None => println!("(none)"),
            }
        }
        Commands::Table { json } => {
            let table = provider.resolving_table();
            if json {
                let rows: Vec<_> = table
                    .iter()
                    .map(|(key, site)| serde_json::json!({ "key": key, "site": site.name }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for (key, site) in table.iter() {
                    println!("{}\t{}\t{}", key.path(), key.language(), site.name);
                }
            }
        }
        Commands::Check => {
            println!("{}: {} sites OK", cli.config.display(), config.sites.len());
        }
        Commands::Watch => watch(&cli.config, provider).await?,
    }

    Ok(())
}

async fn watch(path: &Path, provider: LinkProvider) -> Result<(), Box<dyn std::error::Error>> {
    let (watcher, mut updates) = ConfigWatcher::new(path);
    let _watcher = watcher.run()?;

    let entries = provider.resolving_table().len();
    tracing::info!(entries, "Watching for site changes");

    loop {
        tokio::select! {
            update = updates.recv() => {
                let Some(new_config) = update else { break };
                provider.registry().replace(new_config.sites);
                let sites = provider.registry().sites().len();
                let entries = provider.resolving_table().len();
                println!("sites reloaded: {} sites, {} resolving entries", sites, entries);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received");
                break;
            }
        }
    }
    Ok(())
}

fn find_node(config: &LinkConfig, path: &str, request: &RequestArgs) -> ContentNode {
    config
        .items
        .iter()
        .find(|item| item.path.eq_ignore_ascii_case(path) && item.database.eq_ignore_ascii_case(&request.database))
        .map(|item| item.to_node(&request.language))
        .unwrap_or_else(|| ContentNode::new(path, &request.language, &request.database))
}

fn request_info(provider: &LinkProvider, request: &RequestArgs) -> RequestInfo {
    let info = RequestInfo::new(&request.scheme, &request.host, request.port).with_language(&request.language);
    match request.current_site.as_deref().and_then(|name| provider.registry().get(name)) {
        Some(site) => info.with_site(site),
        None => info,
    }
}

fn url_options(provider: &LinkProvider, args: OptionArgs) -> Result<UrlOptions, String> {
    let mut options = provider.default_options().clone();
    if let Some(embed) = args.embed {
        options = options.with_language_embedding(embed.into());
    }
    if args.query_string {
        options = options.with_language_location(LanguageLocation::QueryString);
    }
    if args.server_url {
        options = options.with_server_url(true);
    }
    if args.display_name {
        options = options.with_display_name(true);
    }
    if args.encode {
        options = options.with_encode_names(true);
    }
    if args.no_extension {
        options = options.with_aspx_extension(false);
    }
    if let Some(name) = args.site {
        let site = provider
            .registry()
            .get(&name)
            .ok_or_else(|| format!("unknown site '{}'", name))?;
        options = options.with_site(site);
    }
    Ok(options)
}
