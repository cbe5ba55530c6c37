use anyhow::{anyhow, bail, Error as AnyError};
use clap::{Parser, ValueEnum};
use geo::geometry::Coord;
use log::warn;
use std::{convert::Infallible, ops::Range, path::PathBuf, str::FromStr};
use terrain::{constants::DEFAULT_SAMPLES, ForestZones, DEFAULT_CANOPY_M};

/// Plot the terrain elevation profile between two points.
///
/// Any of `--start`, `--dest` or `--zero-level` not given on the
/// command line is asked for on stdin.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Cli {
    /// Start "lat,lon".
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<LatLon>,

    /// Destination "lat,lon".
    #[arg(long, allow_hyphen_values = true)]
    pub dest: Option<LatLon>,

    /// Add conditional zero level ("yes"/"no", "да"/"нет").
    #[arg(short, long)]
    pub zero_level: Option<YesNo>,

    /// Number of steps between start and destination.
    #[arg(short, long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: usize,

    /// Forested sample index range, "start..end" (end exclusive).
    /// May be repeated. Defaults to 34..43 and 56..86.
    #[arg(short, long = "forest", value_name = "RANGE")]
    pub forest: Vec<IndexRange>,

    /// Do not add canopy height anywhere.
    #[arg(long, conflicts_with = "forest", default_value_t = false)]
    pub no_forest: bool,

    /// Canopy height, in meters, added over forest ranges.
    #[arg(long, default_value_t = DEFAULT_CANOPY_M)]
    pub canopy: f64,

    /// Elevation lookup endpoint.
    #[arg(long, default_value = openelev::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Elevation lookup timeout, in seconds.
    #[arg(long, default_value_t = openelev::DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Chart image path; ".svg" writes an SVG, anything else a bitmap.
    #[arg(long, default_value = "result.png")]
    pub chart: PathBuf,

    /// Report path.
    #[arg(long, default_value = "result.csv")]
    pub report: PathBuf,

    /// Report layout.
    #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
    pub format: ReportFormat,

    /// Skip plotting to the terminal.
    #[arg(long, default_value_t = false)]
    pub no_display: bool,
}

impl Cli {
    pub fn forest_zones(&self) -> ForestZones {
        let mut zones = if self.no_forest {
            ForestZones::none()
        } else if self.forest.is_empty() {
            ForestZones::default()
        } else {
            ForestZones {
                ranges: self.forest.iter().map(|r| r.0.clone()).collect(),
                ..ForestZones::default()
            }
        };
        zones.canopy_m = self.canopy;
        zones
    }
}

#[derive(Clone, Debug, Copy, PartialEq)]
pub struct LatLon(pub Coord<f64>);

impl FromStr for LatLon {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (lat_str, lon_str) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("not a valid lat,lon pair: {s:?}"))?;
        let lat = f64::from_str(lat_str.trim())?;
        let lon = f64::from_str(lon_str.trim())?;
        if !(-90.0..=90.0).contains(&lat) {
            bail!("latitude {lat} out of range");
        }
        if !(-180.0..=180.0).contains(&lon) {
            bail!("longitude {lon} out of range");
        }
        Ok(Self(Coord { y: lat, x: lon }))
    }
}

/// A lenient yes/no answer; anything unrecognized means "no".
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub struct YesNo(pub bool);

impl FromStr for YesNo {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Infallible> {
        match s.trim().to_lowercase().as_str() {
            "да" | "д" | "yes" | "y" => Ok(Self(true)),
            "нет" | "н" | "no" | "n" => Ok(Self(false)),
            other => {
                warn!("unrecognized answer {other:?}, assuming no");
                Ok(Self(false))
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexRange(pub Range<usize>);

impl FromStr for IndexRange {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, AnyError> {
        let (start, end) = s
            .split_once("..")
            .ok_or_else(|| anyhow!("not a valid start..end range: {s:?}"))?;
        let start = usize::from_str(start.trim())?;
        let end = usize::from_str(end.trim())?;
        if start > end {
            bail!("range start {start} is past its end {end}");
        }
        Ok(Self(start..end))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Semicolon separated table.
    Csv,

    /// Array of JSON records.
    Json,
}
