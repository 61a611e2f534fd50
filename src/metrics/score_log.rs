use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::visualization::plot_series;

/// Plain-text score log: one integer per line, each the score gained over
/// one report interval. Every line is flushed as soon as it is written so
/// the file can be watched while training runs.
pub struct ScoreLog {
    writer: BufWriter<File>,
    history: Vec<i64>,
}

impl ScoreLog {
    /// Create (or truncate) the log file.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(ScoreLog {
            writer: BufWriter::new(file),
            history: Vec::new(),
        })
    }

    pub fn record(&mut self, delta: i64) -> Result<()> {
        writeln!(self.writer, "{}", delta)?;
        self.writer.flush()?;
        self.history.push(delta);
        Ok(())
    }

    pub fn history(&self) -> &[i64] {
        &self.history
    }

    /// The history so far as an ASCII chart.
    pub fn plot(&self, width: usize, height: usize) -> String {
        let values: Vec<f32> = self.history.iter().map(|&v| v as f32).collect();
        plot_series(&values, "Score per interval", width, height)
    }
}
