use crate::Result;

use geo::Coord;
use serde::Deserialize;
use std::{io::Read, path::Path};

/// A named location, extra columns in the source file are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PointRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl PointRecord {
    pub fn lonlat(&self) -> Coord {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }
}

pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<PointRecord>> {
    let reader = csv::Reader::from_path(path)?;
    collect_records(reader)
}

pub fn read_csv_from(rdr: impl Read) -> Result<Vec<PointRecord>> {
    collect_records(csv::Reader::from_reader(rdr))
}

fn collect_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<PointRecord>> {
    let mut records = Vec::new();
    for record in reader.deserialize::<PointRecord>() {
        records.push(record?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn reads_named_records() -> Result<()> {
        let data = "\
name,lat,lon,line
Nørreport,55.6833,12.5713,A
Østerport,55.6925,12.5866,B
";
        let records = read_csv_from(data.as_bytes())?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Nørreport");
        assert_eq!(
            records[1].lonlat(),
            Coord {
                x: 12.5866,
                y: 55.6925
            }
        );
        Ok(())
    }

    #[test]
    fn column_order_does_not_matter() -> Result<()> {
        let data = "lon,name,lat\n12.5,Valby,55.66\n";
        let records = read_csv_from(data.as_bytes())?;

        assert_eq!(records[0].lat, 55.66);
        assert_eq!(records[0].lon, 12.5);
        Ok(())
    }

    #[test]
    fn bad_coordinate_is_an_error() {
        let data = "name,lat,lon\nHellerup,north,12.57\n";
        let res = read_csv_from(data.as_bytes());

        assert!(matches!(res, Err(Error::CsvError(_))));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_csv("/this/file/does/not/exist.csv").is_err());
    }
}
