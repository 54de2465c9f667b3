use anyhow::Result;
use std::io::Write;

use super::{BreakdownRow, OutputWriter, Report};
use crate::roi::RoiCalculation;

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, calc: &RoiCalculation) -> Result<()> {
        writeln!(self.writer, "# ROI Calculation: {}", escape(&calc.project_name))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| | |")?;
        writeln!(self.writer, "|---|---|")?;
        writeln!(self.writer, "| Client | {} |", escape(&calc.client_name))?;
        writeln!(self.writer, "| Project | {} |", escape(&calc.project_name))?;
        writeln!(self.writer, "| Period Analyzed | {} |", calc.period_analyzed)?;
        writeln!(
            self.writer,
            "| Calculation Date | {} |",
            calc.calculation_date.format("%Y-%m-%d")
        )?;
        Ok(())
    }

    fn write_sections(&mut self, calc: &RoiCalculation) -> Result<()> {
        for section in calc.summary_sections() {
            writeln!(self.writer)?;
            writeln!(self.writer, "## {}", title_case(&section.title))?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Metric | Value |")?;
            writeln!(self.writer, "|--------|------:|")?;
            for line in &section.lines {
                writeln!(self.writer, "| {} | {} |", line.label, line.value)?;
            }
        }
        Ok(())
    }

    fn write_breakdown(&mut self, rows: &[BreakdownRow]) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "## Input Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Baseline | Current | Change |")?;
        writeln!(self.writer, "|--------|---------:|--------:|-------:|")?;
        for row in rows {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                row.metric, row.baseline, row.current, row.change
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        self.write_header(&report.calculation)?;
        self.write_sections(&report.calculation)?;
        if let Some(rows) = &report.breakdown {
            self.write_breakdown(rows)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// "COST SAVINGS" -> "Cost Savings"; a parenthesized suffix is kept as is
fn title_case(title: &str) -> String {
    let (head, tail) = match title.find(" (") {
        Some(idx) => title.split_at(idx),
        None => (title, ""),
    };
    let words: Vec<String> = head
        .split_whitespace()
        .map(|word| match word {
            "ROI" => word.to_string(),
            _ => {
                let lower = word.to_lowercase();
                let mut chars = lower.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect();
    format!("{}{}", words.join(" "), tail)
}

fn escape(text: &str) -> String {
    text.replace('|', "\\|")
}
