//! Writes a report to any `Write` sink (stdout in the binary).

use std::io::Write;

use crate::metrics::Report;
use crate::types::OutputFormat;

pub struct OutputWriter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    pub fn write_report(&mut self, report: &Report) -> Result<(), Box<dyn std::error::Error>> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, report)?;
                writeln!(self.out)?;
            }
            OutputFormat::Jsonl => {
                for line in report.lines()? {
                    serde_json::to_writer(&mut self.out, &line)?;
                    writeln!(self.out)?;
                }
            }
        }
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
