// crates/citysuggest-core/src/loader/tsv.rs

//! Parser for the GeoNames-style cities dump (`cities_canada-usa.tsv`).
//!
//! One header line, then one tab-separated record per line. Only the
//! columns below are read; anything past column 17 is ignored.

use super::LoadReport;
use crate::error::{Result, SuggestError};
use crate::model::City;
use std::io::BufRead;
use tracing::warn;

const COL_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_ASCII: usize = 2;
const COL_ALT_NAMES: usize = 3;
const COL_LAT: usize = 4;
const COL_LON: usize = 5;
const COL_COUNTRY: usize = 8;
const COL_ADMIN1: usize = 10;
const COL_POPULATION: usize = 14;
const COL_TIMEZONE: usize = 17;

/// Records with fewer fields than this are skipped.
pub const MIN_FIELDS: usize = COL_TIMEZONE + 1;

/// Parses a TSV stream into city records.
///
/// - Rows with fewer than [`MIN_FIELDS`] fields are skipped.
/// - Rows whose latitude or longitude does not parse, or is not finite,
///   are skipped.
/// - An unparsable population is recorded as `0` and the row is kept.
///
/// Blank lines are ignored. A stream without even a header line is
/// [`SuggestError::InvalidData`].
pub fn parse_tsv<R: BufRead>(reader: R) -> Result<LoadReport> {
    let mut lines = reader.lines();

    match lines.next() {
        Some(header) => {
            header?;
        }
        None => return Err(SuggestError::InvalidData("empty dataset: missing header".into())),
    }

    let mut cities = Vec::new();
    let mut skipped = 0usize;

    // Line 1 is the header.
    for (idx, line) in lines.enumerate() {
        let line_num = idx + 2;
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }

        match parse_record(line, line_num) {
            Some(city) => cities.push(city),
            None => skipped += 1,
        }
    }

    Ok(LoadReport { cities, skipped })
}

fn parse_record(line: &str, line_num: usize) -> Option<City> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        warn!(
            line = line_num,
            fields = fields.len(),
            "skipping record with insufficient fields"
        );
        return None;
    }

    let latitude = match fields[COL_LAT].trim().parse::<f64>() {
        Ok(v) => v,
        Err(e) => {
            warn!(line = line_num, error = %e, "skipping record with invalid latitude");
            return None;
        }
    };
    let longitude = match fields[COL_LON].trim().parse::<f64>() {
        Ok(v) => v,
        Err(e) => {
            warn!(line = line_num, error = %e, "skipping record with invalid longitude");
            return None;
        }
    };

    if !latitude.is_finite() || !longitude.is_finite() {
        warn!(line = line_num, "skipping record with non-finite coordinates");
        return None;
    }

    let population = fields[COL_POPULATION]
        .trim()
        .parse::<u64>()
        .unwrap_or_else(|e| {
            warn!(line = line_num, error = %e, "invalid population, using 0");
            0
        });

    Some(City {
        id: fields[COL_ID].to_owned(),
        name: fields[COL_NAME].to_owned(),
        ascii_name: fields[COL_ASCII].to_owned(),
        alt_names: fields[COL_ALT_NAMES].to_owned(),
        latitude,
        longitude,
        country: fields[COL_COUNTRY].to_owned(),
        admin1: fields[COL_ADMIN1].to_owned(),
        population,
        timezone: fields[COL_TIMEZONE].to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "id\tname\tascii\talt_name\tlat\tlong\tfeat_class\tfeat_code\tcountry\tcc2\tadmin1\tadmin2\tadmin3\tadmin4\tpopulation\televation\tdem\ttz\tmodified_at";

    fn row(id: &str, name: &str, lat: &str, lon: &str, pop: &str) -> String {
        format!(
            "{id}\t{name}\t{name}\t\t{lat}\t{lon}\tP\tPPL\tCA\t\t08\t\t\t\t{pop}\t\t200\tAmerica/Toronto\t2012-08-20"
        )
    }

    fn parse(body: &[String]) -> LoadReport {
        let mut text = String::from(HEADER);
        for line in body {
            text.push('\n');
            text.push_str(line);
        }
        parse_tsv(Cursor::new(text)).unwrap()
    }

    #[test]
    fn maps_columns() {
        let report = parse(&[row("6167865", "Toronto", "43.70011", "-79.4163", "4612191")]);
        assert_eq!(report.skipped, 0);
        let city = &report.cities[0];
        assert_eq!(city.id, "6167865");
        assert_eq!(city.name, "Toronto");
        assert_eq!(city.ascii_name, "Toronto");
        assert_eq!(city.latitude, 43.70011);
        assert_eq!(city.longitude, -79.4163);
        assert_eq!(city.country, "CA");
        assert_eq!(city.admin1, "08");
        assert_eq!(city.population, 4_612_191);
        assert_eq!(city.timezone, "America/Toronto");
    }

    #[test]
    fn skips_short_and_bad_coordinate_rows() {
        let report = parse(&[
            "1\tShort\tShort".to_string(),
            row("2", "BadLat", "north", "-79.0", "10"),
            row("3", "BadLon", "43.0", "", "10"),
            row("4", "NaN", "NaN", "-79.0", "10"),
            row("5", "Good", "43.0", "-79.0", "10"),
        ]);
        assert_eq!(report.skipped, 4);
        assert_eq!(report.cities.len(), 1);
        assert_eq!(report.cities[0].name, "Good");
    }

    #[test]
    fn bad_population_defaults_to_zero() {
        let report = parse(&[
            row("1", "Nowhere", "43.0", "-79.0", "n/a"),
            row("2", "Negative", "43.0", "-79.0", "-5"),
        ]);
        assert_eq!(report.skipped, 0);
        assert!(report.cities.iter().all(|c| c.population == 0));
    }

    #[test]
    fn tolerates_crlf_and_blank_lines() {
        let text = format!(
            "{HEADER}\r\n{}\r\n\r\n{}\r\n",
            row("1", "Ajax", "43.85", "-79.03", "90167"),
            row("2", "Barrie", "44.40", "-79.67", "182041")
        );
        let report = parse_tsv(Cursor::new(text)).unwrap();
        assert_eq!(report.cities.len(), 2);
        assert_eq!(report.cities[1].timezone, "America/Toronto");
    }

    #[test]
    fn empty_input_is_invalid() {
        let err = parse_tsv(Cursor::new("")).unwrap_err();
        assert!(matches!(err, SuggestError::InvalidData(_)));
    }

    #[test]
    fn header_only_is_empty_dataset() {
        let report = parse_tsv(Cursor::new(HEADER)).unwrap();
        assert!(report.cities.is_empty());
        assert_eq!(report.skipped, 0);
    }
}
