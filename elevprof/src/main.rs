mod chart;
mod options;
mod prompt;
mod report;

use anyhow::{Context, Error as AnyError};
use clap::Parser;
use log::info;
use options::{Cli, LatLon, YesNo};
use std::{
    io::{BufRead, Write},
    time::Duration,
};
use terrain::{ElevationSource, Profile};

fn main() -> Result<(), AnyError> {
    env_logger::init();

    let cli = Cli::parse();
    let client = openelev::Client::new(&cli.endpoint, Duration::from_secs(cli.timeout))?;

    let stdin = std::io::stdin();
    let profile = profile(&cli, &mut stdin.lock(), &mut std::io::stdout(), &client)?;

    chart::render(&cli.chart, &profile)
        .with_context(|| format!("rendering {}", cli.chart.display()))?;
    info!("wrote chart to {}", cli.chart.display());

    report::write(&cli.report, cli.format, &profile)?;
    info!("wrote report to {}", cli.report.display());

    if !cli.no_display {
        chart::display(&profile);
    }
    Ok(())
}

/// Fills in whatever the command line left out from `input`, then
/// builds the profile.
fn profile<R, W, S>(cli: &Cli, input: &mut R, output: &mut W, source: &S) -> Result<Profile, AnyError>
where
    R: BufRead,
    W: Write,
    S: ElevationSource + ?Sized,
{
    let LatLon(start) = match cli.start {
        Some(start) => start,
        None => prompt::ask(input, output, "Start point (lat,lon)")?,
    };
    let LatLon(dest) = match cli.dest {
        Some(dest) => dest,
        None => prompt::ask(input, output, "Destination point (lat,lon)")?,
    };
    let YesNo(zero_level) = match cli.zero_level {
        Some(answer) => answer,
        None => prompt::ask(input, output, "Add conditional zero level (yes/no)")?,
    };

    let profile = Profile::builder()
        .start(start)
        .end(dest)
        .samples(cli.samples)
        .zero_level(zero_level)
        .forest(cli.forest_zones())
        .build(source)
        .context("building terrain profile")?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::{options::Cli, profile};
    use clap::Parser;
    use openelev::{Client, DEFAULT_TIMEOUT};
    use serde_json::json;

    fn lookup_body(count: usize, elevation: f64) -> String {
        let results: Vec<_> = (0..count)
            .map(|_| json!({"elevation": elevation, "latitude": 0.0, "longitude": 0.0}))
            .collect();
        json!({ "results": results }).to_string()
    }

    #[test]
    fn test_prompts_for_missing_values() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/lookup")
            .with_status(200)
            .with_body(lookup_body(100, 150.0))
            .create();
        let client = Client::new(&format!("{}/lookup", server.url()), DEFAULT_TIMEOUT).unwrap();

        let cli = Cli::parse_from(["elevprof"]);
        let mut input = "52.189834, 24.374457\n52.4352341, 24.8846534\nда\n".as_bytes();
        let mut output = Vec::new();
        let profile = profile(&cli, &mut input, &mut output, &client).unwrap();
        mock.assert();

        assert_eq!(profile.len(), 100);
        assert!(profile.zero_level_m.iter().any(|&z| z > 0.0));
        assert_eq!(profile.forest_elev_m[40], profile.corrected_elev_m[40] + 20.0);
        let prompts = String::from_utf8(output).unwrap();
        assert!(prompts.contains("Start point"));
        assert!(prompts.contains("Destination point"));
        assert!(prompts.contains("zero level"));
    }

    #[test]
    fn test_flags_skip_prompts() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/lookup")
            .with_status(200)
            .with_body(lookup_body(11, 10.0))
            .create();
        let client = Client::new(&format!("{}/lookup", server.url()), DEFAULT_TIMEOUT).unwrap();

        let cli = Cli::parse_from([
            "elevprof",
            "--start=0,0",
            "--dest=0,1",
            "--zero-level=no",
            "--samples=10",
            "--no-forest",
        ]);
        let mut output = Vec::new();
        let profile = profile(&cli, &mut "".as_bytes(), &mut output, &client).unwrap();
        assert!(output.is_empty());
        assert_eq!(profile.len(), 11);
        assert_eq!(profile.forest_elev_m, vec![10.0; 11]);
    }

    #[test]
    fn test_malformed_lookup_fails() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("POST", "/lookup")
            .with_status(200)
            .with_body(r#"{"status": "ok"}"#)
            .create();
        let client = Client::new(&format!("{}/lookup", server.url()), DEFAULT_TIMEOUT).unwrap();

        let cli = Cli::parse_from(["elevprof", "--start=0,0", "--dest=0,1", "-z", "no"]);
        let err = profile(&cli, &mut "".as_bytes(), &mut Vec::new(), &client).unwrap_err();
        assert!(format!("{err:#}").contains("malformed lookup response"), "{err:#}");
    }
}
