use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// An ordered, write-once script for a wrapped tool.
///
/// Lines are stored as assembled and trimmed when rendered, so an operation may build a
/// line from optional fragments without worrying about stray whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionDocument {
    lines: Vec<String>,
}

impl InstructionDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends a line made of the non-empty `parts`, separated by single spaces.
    pub fn push_parts(&mut self, parts: &[&str]) {
        let line = parts
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        self.lines.push(line);
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// Returns the lines as they will be written.
    pub fn lines(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.trim()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line.trim())?;
        }
        Ok(())
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()
    }
}

impl fmt::Display for InstructionDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.trim())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_parts_skips_empty_fragments() {
        let mut doc = InstructionDocument::new();
        doc.push_parts(&["radgyr", "", "out", "rgyr.dat", " mass ", "nomax"]);
        assert_eq!(doc.lines(), vec!["radgyr out rgyr.dat mass nomax"]);
    }

    #[test]
    fn written_lines_are_trimmed_and_newline_terminated() {
        let mut doc = InstructionDocument::new();
        doc.push("parm top.prmtop ");
        doc.push("  trajin traj.dcd 1 -1 1");

        let mut buffer = Vec::new();
        doc.write_to(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "parm top.prmtop\ntrajin traj.dcd 1 -1 1\n"
        );
        assert_eq!(doc.to_string(), "parm top.prmtop\ntrajin traj.dcd 1 -1 1\n");
    }

    #[test]
    fn write_to_path_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("instructions.in");
        let mut doc = InstructionDocument::new();
        doc.extend(["Potential", "Temperature"]);
        doc.write_to_path(&path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Potential\nTemperature\n"
        );
    }
}
