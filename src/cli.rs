use std::{path::PathBuf, time::Duration};

use clap::Parser;
use url::Url;

#[derive(Parser)]
#[command(author, version, about, long_about)]
pub struct Cli {
    /// Where to write the rendered page, `-` for standard output.
    #[clap(long, env = "DISASTERMAP_OUTPUT", default_value = "multi_disaster_map.html")]
    pub output: PathBuf,

    /// Static GeoJSON file with the drought-prone regions.
    #[clap(long, env = "DISASTERMAP_DROUGHT_ZONES", default_value = "drought_prone_areas.geojson")]
    pub drought_zones: PathBuf,

    /// USGS earthquake summary feed.
    #[clap(
        long,
        env = "DISASTERMAP_EARTHQUAKE_FEED_URL",
        default_value = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson"
    )]
    pub earthquake_feed_url: Url,

    /// GDACS flood event list.
    #[clap(
        long,
        env = "DISASTERMAP_FLOOD_FEED_URL",
        default_value = "https://www.gdacs.org/gdacsapi/api/events/geteventlist/FL"
    )]
    pub flood_feed_url: Url,

    /// HTTP request timeout.
    #[clap(long = "timeout-secs", env = "DISASTERMAP_TIMEOUT_SECS", default_value = "30", value_parser = parse_secs)]
    pub timeout: Duration,
}

fn parse_secs(value: &str) -> Result<Duration, std::num::ParseIntError> {
    value.parse().map(Duration::from_secs)
}

impl Cli {
    /// Whether the page should go to standard output instead of a file.
    pub fn writes_to_stdout(&self) -> bool {
        self.output.as_os_str() == "-"
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_invocation_uses_defaults() {
        let cli = Cli::parse_from(["disastermap"]);
        assert_eq!(cli.output, PathBuf::from("multi_disaster_map.html"));
        assert_eq!(cli.drought_zones, PathBuf::from("drought_prone_areas.geojson"));
        assert_eq!(cli.earthquake_feed_url.host_str(), Some("earthquake.usgs.gov"));
        assert_eq!(cli.flood_feed_url.host_str(), Some("www.gdacs.org"));
        assert_eq!(cli.timeout, Duration::from_secs(30));
        assert!(!cli.writes_to_stdout());
    }

    #[test]
    fn dash_output_ok() {
        let cli = Cli::parse_from(["disastermap", "--output", "-", "--timeout-secs", "5"]);
        assert!(cli.writes_to_stdout());
        assert_eq!(cli.timeout, Duration::from_secs(5));
    }
}
