//! CSV export for computed supply energy traces.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::supply::SupplyEnergy;

/// One exported row: the operating conditions of a timestep plus the
/// energy flows computed for it.
#[derive(Debug, Clone)]
pub struct SupplyRecord {
    /// Timestep index.
    pub timestep: usize,
    /// Simulation time in hours.
    pub time_hr: f32,
    /// Thermal load met by the supply system (kW).
    pub load_kw: f32,
    /// Outdoor air temperature (°C).
    pub t_out_c: f32,
    /// Computed energy flows.
    pub energy: SupplyEnergy,
}

/// Schema v1 column header for CSV trace export.
const HEADER: &str = "timestep,time_hr,load_kw,t_out_c,\
                      fossil_fuel_in_kw,electricity_in_kw,electricity_out_kw,cop";

/// Exports supply records to a CSV file at the given path.
///
/// Writes a header row followed by one data row per record using the
/// schema v1 column layout. Produces deterministic output for identical
/// inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(records: &[SupplyRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, buf)
}

/// Writes supply records as CSV to any writer.
///
/// Unset energy channels are written as empty cells.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(records: &[SupplyRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(',').map(str::trim))?;

    // Data rows
    for r in records {
        wtr.write_record(&[
            r.timestep.to_string(),
            format!("{:.2}", r.time_hr),
            format!("{:.4}", r.load_kw),
            format!("{:.2}", r.t_out_c),
            channel(r.energy.fossil_fuel_in_kw),
            channel(r.energy.electricity_in_kw),
            channel(r.energy.electricity_out_kw),
            channel(r.energy.cop),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Formats an energy channel, leaving unset channels empty.
fn channel(value: Option<f32>) -> String {
    value.map(|v| format!("{v:.4}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supply::{SupplyInput, SupplyKind, compute_supply};

    fn make_record(t: usize, kind: SupplyKind) -> SupplyRecord {
        let load_kw = 10.0;
        let t_out_c = 5.0;
        let input = SupplyInput::for_heating(load_kw, t_out_c, 35.0);
        SupplyRecord {
            timestep: t,
            time_hr: t as f32,
            load_kw,
            t_out_c,
            energy: compute_supply(kind, &input).unwrap(),
        }
    }

    #[test]
    fn header_matches_schema_v1() {
        let records = vec![make_record(0, SupplyKind::OldOilBoiler)];
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let first_line = output.as_deref().unwrap_or("").lines().next().unwrap_or("");
        assert_eq!(
            first_line,
            "timestep,time_hr,load_kw,t_out_c,\
             fossil_fuel_in_kw,electricity_in_kw,electricity_out_kw,cop"
        );
    }

    #[test]
    fn row_count_matches_record_count() {
        let records: Vec<SupplyRecord> = (0..24)
            .map(|t| make_record(t, SupplyKind::AirSourceHeatPump))
            .collect();
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).ok();
        let output = String::from_utf8(buf).ok();
        let lines: Vec<&str> = output.as_deref().unwrap_or("").lines().collect();
        // 1 header + 24 data rows
        assert_eq!(lines.len(), 25);
    }

    #[test]
    fn deterministic_output() {
        let records: Vec<SupplyRecord> = (0..5)
            .map(|t| make_record(t, SupplyKind::CombinedHeatAndPower))
            .collect();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&records, &mut buf1).ok();
        write_csv(&records, &mut buf2).ok();
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn unset_channels_serialize_as_empty_cells() {
        // A boiler never reports a COP, so the last cell must be empty.
        let records = vec![make_record(0, SupplyKind::NewOilBoiler)];
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).ok();
        let output = String::from_utf8(buf).unwrap_or_default();
        let row = output.lines().nth(1).unwrap_or("");
        assert!(row.ends_with(','), "cop cell should be empty: {row}");
    }

    #[test]
    fn round_trip_parseable() {
        let records: Vec<SupplyRecord> = (0..3)
            .map(|t| make_record(t, SupplyKind::AirSourceHeatPump))
            .collect();
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).ok();

        let mut rdr = csv::ReaderBuilder::new().from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().ok();
        assert_eq!(headers.as_ref().map(csv::StringRecord::len), Some(8));

        let mut row_count = 0;
        for record in rdr.records() {
            let rec = record.ok();
            assert!(rec.is_some(), "every row should parse");
            let rec = rec.as_ref();
            // Populated numeric columns parse as f32
            for i in 1..8 {
                let cell = &rec.unwrap()[i];
                if !cell.is_empty() {
                    let val: Result<f32, _> = cell.parse();
                    assert!(val.is_ok(), "column {i} should parse as f32");
                }
            }
            row_count += 1;
        }
        assert_eq!(row_count, 3);
    }
}
