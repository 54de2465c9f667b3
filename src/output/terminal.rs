use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use std::io::Write;

use super::{BreakdownRow, OutputWriter, Report};
use crate::formatting::{formatter_for, FormattingConfig, OutputFormatter};
use crate::roi::render_summary;

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatter_for(config),
        }
    }

    fn write_breakdown(&mut self, rows: &[BreakdownRow]) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", self.formatter.header("INPUT BREAKDOWN"))?;
        writeln!(self.writer, "{}", breakdown_table(rows))?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        let summary = render_summary(&report.calculation, self.formatter.as_ref());
        writeln!(self.writer, "{summary}")?;

        if !report.calculation.roi_metrics.pays_back() {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{}",
                self.formatter
                    .warning("Net monthly benefit is not positive: the implementation cost is never recovered at the current run rate.")
            )?;
        }

        if let Some(rows) = &report.breakdown {
            self.write_breakdown(rows)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

fn breakdown_table(rows: &[BreakdownRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Metric", "Baseline", "Current", "Change"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(&row.metric),
            Cell::new(&row.baseline).set_alignment(CellAlignment::Right),
            Cell::new(&row.current).set_alignment(CellAlignment::Right),
            Cell::new(&row.change).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
