//! Exported G-code program.

use std::fmt;
use std::io::{self, Write};

/// A G-code program split into its four sections.
///
/// Sections are separated by one blank line each, so the full program has
/// `header + start + motion + finish + 3` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GcodeProgram {
    pub(crate) header: Vec<String>,
    pub(crate) start: Vec<String>,
    pub(crate) motion: Vec<String>,
    pub(crate) finish: Vec<String>,
}

impl GcodeProgram {
    /// `; ` comment lines describing the machine and pattern
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn start_block(&self) -> &[String] {
        &self.start
    }

    /// One line per path point, in path order
    pub fn motion(&self) -> &[String] {
        &self.motion
    }

    pub fn finish_block(&self) -> &[String] {
        &self.finish
    }

    /// Every line of the program, separators included
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        let blank = std::iter::once("");
        self.header
            .iter()
            .map(String::as_str)
            .chain(blank.clone())
            .chain(self.start.iter().map(String::as_str))
            .chain(blank.clone())
            .chain(self.motion.iter().map(String::as_str))
            .chain(blank)
            .chain(self.finish.iter().map(String::as_str))
    }

    pub fn line_count(&self) -> usize {
        self.header.len() + self.start.len() + self.motion.len() + self.finish.len() + 3
    }

    /// The program as text, one line per `\n`, with a trailing newline
    pub fn to_gcode_string(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Writes the program text to `writer`
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}

impl fmt::Display for GcodeProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
