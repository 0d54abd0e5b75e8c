mod cli;
mod client;
mod feed;
mod geojson;
mod map;
mod page;
mod prelude;
mod render;
#[cfg(test)]
mod testing;
mod tracing;
mod tracker;

use clap::{Parser, crate_version};
use tokio::io::AsyncWriteExt;

use crate::{cli::Cli, client::Client, prelude::*, tracker::Tracker};

#[tokio::main]
async fn main() -> Result {
    let cli = Cli::parse();
    let _tracing_guard = crate::tracing::init()?;
    info!(version = crate_version!(), "🌐 Starting…");

    let page = Tracker::builder()
        .client(Client::new(cli.timeout)?)
        .earthquake_feed_url(cli.earthquake_feed_url.clone())
        .flood_feed_url(cli.flood_feed_url.clone())
        .drought_zones_path(cli.drought_zones.clone())
        .build()
        .run()
        .await?;
    let html = page.render()?.into_string();

    if cli.writes_to_stdout() {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(html.as_bytes()).await?;
        stdout.flush().await?;
    } else {
        tokio::fs::write(&cli.output, html)
            .await
            .with_context(|| format!("failed to write `{}`", cli.output.display()))?;
        info!(path = %cli.output.display(), "🗺️ Written");
    }
    Ok(())
}
