use anyhow::Result;
use std::io::Write;

use super::{OutputWriter, Report};

/// Writes the structured export document. The input breakdown is not part
/// of the export and is left out.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        let json = report.calculation.to_json()?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roi::RoiExport;
    use crate::scenario::Scenario;
    use chrono::NaiveDate;

    #[test]
    fn test_json_writer_emits_parseable_export() {
        let calculation = Scenario::example()
            .calculator()
            .calculate_as_of(NaiveDate::from_ymd_opt(2026, 4, 30).unwrap());
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&Report::new(calculation.clone()))
            .unwrap();

        let parsed: RoiExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed, calculation.to_export());
        assert_eq!(parsed.roi_metrics.payback_period_months, Some(2.91));
    }
}
