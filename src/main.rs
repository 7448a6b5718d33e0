mod cli;

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_admin::{AdminConfig, CourseAdmin, HttpCourseStore};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "course_admin=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::parse();

    let mut config = AdminConfig::new_from_env()?;
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }

    let store = Arc::new(HttpCourseStore::new(config.api_url.as_str())?);
    info!("using course API at {}", store.base_url());

    let mut admin = CourseAdmin::new(store, config.page_size);
    admin.refresh().await?;

    cli::run(args.command, &mut admin).await?;
    Ok(())
}
