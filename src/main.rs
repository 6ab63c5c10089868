use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use catalog_engine::bookmarks::handlers::{
    handle_list_bookmarks, handle_record_read, handle_toggle_bookmark,
};
use catalog_engine::bookmarks::store::{BookmarkStore, ReadStatsStore};
use catalog_engine::catalog::handlers::{handle_get_book, handle_list_categories};
use catalog_engine::catalog::store::CatalogStore;
use catalog_engine::ingestion::feed;
use catalog_engine::ingestion::handlers::{handle_ingest_status, handle_refresh};
use catalog_engine::ingestion::types::IngestConfig;
use catalog_engine::search::handlers::handle_search;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// The public sheet feed the original catalog reads from. Overridable with
/// `--feed-url`.
const DEFAULT_FEED_URL: &str =
    "https://opensheet.elk.sh/18X4dQ4J7RyZDvb6XJdZ-jDdzcYg8OUboOrPEw5R3OUA/1";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!(
            "Usage: {} --bind <addr:port> [--feed-url <url>] [--data-dir <path>]",
            args[0]
        );
        eprintln!("Example: {} --bind 127.0.0.1:7000", args[0]);
        eprintln!(
            "Example: {} --bind 127.0.0.1:7000 --data-dir /var/lib/catalog",
            args[0]
        );

        std::process::exit(1);
    }

    let mut bind_addr: Option<SocketAddr> = None;
    let mut feed_url = DEFAULT_FEED_URL.to_string();
    let mut data_dir = PathBuf::from("data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--feed-url" => {
                feed_url = args[i + 1].clone();
                i += 2;
            }
            "--data-dir" => {
                data_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let bind_addr = match bind_addr {
        Some(addr) => addr,
        None => anyhow::bail!("--bind is required"),
    };

    tracing::info!("Starting catalog node on {}", bind_addr);
    tracing::info!("Feed: {}", feed_url);
    tracing::info!("Data dir: {}", data_dir.display());

    // 1. Stores:
    let catalog = Arc::new(CatalogStore::new());
    let bookmarks = Arc::new(BookmarkStore::load(data_dir.join("bookmarks.json")));
    let read_stats = Arc::new(ReadStatsStore::load(data_dir.join("read-stats.json")));
    let ingest_config = Arc::new(IngestConfig {
        feed_url,
        cache_path: data_dir.join("books-cache.json"),
    });

    // 2. Cache hydration (synchronous, so queries work immediately):
    let cached = feed::hydrate_from_cache(&catalog, &ingest_config).await;
    if cached == 0 {
        tracing::info!("No usable cache, waiting for feed");
    }

    // 3. One-shot background feed refresh; on failure the cache (or empty
    //    catalog) stays in service:
    let refresh_catalog = catalog.clone();
    let refresh_config = ingest_config.clone();
    tokio::spawn(async move {
        if let Err(err) = feed::refresh(&refresh_catalog, &refresh_config).await {
            tracing::error!("Initial feed refresh failed: {:?}", err);
        }
    });

    // 4. HTTP Router:
    let app = Router::new()
        .route("/search", get(handle_search))
        .route("/books/:id", get(handle_get_book))
        .route("/books/:id/read", post(handle_record_read))
        .route("/categories", get(handle_list_categories))
        .route("/bookmarks", get(handle_list_bookmarks))
        .route("/bookmarks/:id/toggle", post(handle_toggle_bookmark))
        .route("/ingest/refresh", post(handle_refresh))
        .route("/ingest/status", get(handle_ingest_status))
        .layer(Extension(catalog))
        .layer(Extension(bookmarks))
        .layer(Extension(read_stats))
        .layer(Extension(ingest_config));

    // 5. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
