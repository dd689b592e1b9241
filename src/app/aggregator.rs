use crate::app::error::{CombineError, FileReadError};
use crate::app::formatter::{OutputGenerator, RULE};
use crate::app::models::{Config, SkippedFile, WriteReport};
use crate::app::scanner::Scanner;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Concatenates every qualifying file under `root` into the configured output.
pub struct Aggregator<'a> {
    root: PathBuf,
    config: &'a Config,
}

impl<'a> Aggregator<'a> {
    pub fn new(root: &Path, config: &'a Config) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
        }
    }

    /// Runs one pass: truncates the output, walks the tree and appends a block
    /// per readable file. Progress lines go to `console`.
    ///
    /// Only an unusable root or output file is fatal. A file that fails to read
    /// is reported and left out.
    pub fn run<C: Write>(&self, console: &mut C) -> Result<WriteReport, CombineError> {
        let output_path = &self.config.output_path;
        let scanner = Scanner::new(self.root.clone(), self.config.clone())?;

        let file = File::create(output_path)
            .map_err(|e| CombineError::OutputCreate(output_path.clone(), e))?;
        let mut out = BufWriter::new(file);
        let write_err = |e: io::Error| CombineError::OutputWrite(output_path.clone(), e);

        say(console, format_args!("Scanning directory: {}", self.root.display()));
        say(console, RULE);

        let mut report = WriteReport::new(output_path);
        for entry in scanner.scan()? {
            match read_text(&entry.path) {
                Ok(content) => {
                    OutputGenerator::write_block(&mut out, &entry.relative_path, &content)
                        .map_err(write_err)?;
                    say(console, format_args!("Added: {}", entry.relative_path));
                    report.added.push(entry.relative_path);
                }
                Err(err) => {
                    say(
                        console,
                        format_args!(
                            "Skipping file due to error: {} ({})",
                            entry.relative_path, err
                        ),
                    );
                    report.skipped.push(SkippedFile {
                        relative_path: entry.relative_path,
                        reason: err.to_string(),
                    });
                }
            }
        }

        out.flush().map_err(write_err)?;

        say(console, RULE);
        say(
            console,
            format_args!("Done! All code saved to: {}", output_path.display()),
        );

        Ok(report)
    }
}

/// Reads a whole file as UTF-8, keeping its bytes untouched.
fn read_text(path: &Path) -> Result<String, FileReadError> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| FileReadError::InvalidUtf8(e.utf8_error()))
}

/// Console output is best effort; a closed console never fails the run.
fn say<C: Write>(console: &mut C, line: impl Display) {
    if let Err(e) = writeln!(console, "{}", line) {
        log::debug!("Console write failed: {}", e);
    }
}
