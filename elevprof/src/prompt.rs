//! Console prompts for values not given on the command line.

use anyhow::{anyhow, Error as AnyError};
use std::{
    io::{BufRead, Write},
    str::FromStr,
};

/// Writes `question` to `output`, then parses one line of `input`.
pub fn ask<T, R, W>(input: &mut R, output: &mut W, question: &str) -> Result<T, AnyError>
where
    T: FromStr,
    T::Err: Into<AnyError>,
    R: BufRead,
    W: Write,
{
    write!(output, "{question}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(anyhow!("no answer for {question:?}"));
    }
    let answer = line.trim();
    T::from_str(answer).map_err(|err| {
        Into::<AnyError>::into(err).context(format!("invalid answer {answer:?} for {question:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::ask;
    use crate::options::{LatLon, YesNo};

    #[test]
    fn test_ask_lat_lon() {
        let mut input = "52.189834, 24.374457\n".as_bytes();
        let mut output = Vec::new();
        let LatLon(coord) = ask(&mut input, &mut output, "Start point (lat,lon)").unwrap();
        assert_eq!(coord.y, 52.189834);
        assert_eq!(coord.x, 24.374457);
        assert_eq!(String::from_utf8(output).unwrap(), "Start point (lat,lon): ");
    }

    #[test]
    fn test_ask_yes_no() {
        let mut input = "да\n".as_bytes();
        let answer: YesNo = ask(&mut input, &mut Vec::new(), "Zero level").unwrap();
        assert_eq!(answer, YesNo(true));
    }

    #[test]
    fn test_ask_malformed() {
        let mut input = "52.189834 24.374457\n".as_bytes();
        assert!(ask::<LatLon, _, _>(&mut input, &mut Vec::new(), "Start").is_err());
    }

    #[test]
    fn test_ask_eof() {
        let mut input = "".as_bytes();
        assert!(ask::<YesNo, _, _>(&mut input, &mut Vec::new(), "Zero level").is_err());
    }
}
