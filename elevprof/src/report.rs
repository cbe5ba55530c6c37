//! Tabular profile export.

use crate::options::ReportFormat;
use anyhow::{Context, Error as AnyError};
use serde::Serialize;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use terrain::Profile;

/// One report row.
///
/// Values are pre-formatted with a decimal comma so spreadsheets in
/// comma-decimal locales read them as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// 1-based sample number.
    pub index: usize,
    pub elevation: String,
    pub distance: String,
}

pub fn records(profile: &Profile) -> Vec<Record> {
    profile
        .forest_elev_m
        .iter()
        .zip(profile.distances_km.iter())
        .enumerate()
        .map(|(idx, (elevation, distance))| Record {
            index: idx + 1,
            elevation: decimal_comma(*elevation),
            distance: decimal_comma(*distance),
        })
        .collect()
}

/// Formats `value` with 3 decimals and a comma separator.
pub fn decimal_comma(value: f64) -> String {
    format!("{value:.3}").replace('.', ",")
}

pub fn write_csv<W: Write>(mut out: W, records: &[Record]) -> Result<(), AnyError> {
    writeln!(out, "index;elevation_m;distance_km")?;
    for Record {
        index,
        elevation,
        distance,
    } in records
    {
        writeln!(out, "{index};{elevation};{distance}")?;
    }
    Ok(())
}

pub fn write_json<W: Write>(mut out: W, records: &[Record]) -> Result<(), AnyError> {
    serde_json::to_writer_pretty(&mut out, records)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the report for `profile` to `path`.
pub fn write(path: &Path, format: ReportFormat, profile: &Profile) -> Result<(), AnyError> {
    let records = records(profile);
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    match format {
        ReportFormat::Csv => write_csv(&mut out, &records)?,
        ReportFormat::Json => write_json(&mut out, &records)?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{decimal_comma, records, write_csv, write_json, Record};
    use terrain::Profile;

    fn profile() -> Profile {
        Profile {
            points: vec![Default::default(); 3],
            distances_km: vec![0.0, 22.046_303_230_609_485, 44.130_255_805_565_575],
            raw_elev_m: vec![141.0, 150.0, 152.5],
            zero_level_m: vec![0.0; 3],
            corrected_elev_m: vec![141.0, 150.0, 152.5],
            forest_elev_m: vec![141.0, 170.0, 152.5],
        }
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(decimal_comma(152.5), "152,500");
        assert_eq!(decimal_comma(0.0), "0,000");
        assert_eq!(decimal_comma(-3.14159), "-3,142");
        assert_eq!(decimal_comma(44.130_255_8), "44,130");
    }

    #[test]
    fn test_records() {
        let records = records(&profile());
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[1],
            Record {
                index: 2,
                elevation: "170,000".to_owned(),
                distance: "22,046".to_owned(),
            }
        );
    }

    #[test]
    fn test_csv() {
        let mut out = Vec::new();
        write_csv(&mut out, &records(&profile())).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "index;elevation_m;distance_km\n\
             1;141,000;0,000\n\
             2;170,000;22,046\n\
             3;152,500;44,130\n"
        );
    }

    #[test]
    fn test_json() {
        let mut out = Vec::new();
        write_json(&mut out, &records(&profile())).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["index"], 1);
        assert_eq!(parsed[2]["elevation"], "152,500");
        assert_eq!(parsed[2]["distance"], "44,130");
    }
}
