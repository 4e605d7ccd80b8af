use crate::error::Result;
use crate::pattern::{NamePattern, PatternError};
use crate::scan::FolderPattern;
use serde_json::{json, Value};
use std::io::Write;
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub struct Output {
    stdout: StandardStream,
}

impl Output {
    pub fn new(color: bool) -> Self {
        let color_choice = if color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }

    fn set_color(&mut self, color: Color) {
        let _ = self.stdout.set_color(ColorSpec::new().set_fg(Some(color)));
    }

    fn set_bold(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_bold(true));
    }

    fn set_dim(&mut self) {
        let _ = self.stdout.set_color(ColorSpec::new().set_dimmed(true));
    }

    fn reset(&mut self) {
        let _ = self.stdout.reset();
    }

    /// Prints `true` or `false`, prefixed with the name when several names
    /// are being checked.
    pub fn print_verdict(&mut self, name: Option<&str>, matched: bool) -> Result<()> {
        if let Some(name) = name {
            write!(self.stdout, "{}: ", name)?;
        }
        self.set_color(if matched { Color::Green } else { Color::Red });
        write!(self.stdout, "{}", matched)?;
        self.reset();
        writeln!(self.stdout)?;
        Ok(())
    }

    pub fn print_explain(
        &mut self,
        raw: &str,
        pattern: &NamePattern,
        error: Option<&PatternError>,
    ) -> Result<()> {
        self.set_bold();
        write!(self.stdout, "{}", raw)?;
        self.reset();
        write!(self.stdout, ": ")?;

        match error {
            Some(e) => {
                self.set_color(Color::Yellow);
                write!(self.stdout, "{}", pattern)?;
                self.reset();
                writeln!(self.stdout, " ({})", e)?;
            }
            None => {
                self.set_dim();
                write!(self.stdout, "{}", pattern)?;
                self.reset();
                writeln!(self.stdout)?;
            }
        }
        Ok(())
    }

    pub fn print_folder(&mut self, name: Option<&str>, folder: &FolderPattern) -> Result<()> {
        if let Some(name) = name {
            self.set_dim();
            write!(self.stdout, "{}: ", name)?;
            self.reset();
        }
        self.set_color(Color::Green);
        write!(self.stdout, "{}", folder.name)?;
        self.reset();
        writeln!(self.stdout)?;
        Ok(())
    }

    pub fn print_json(&mut self, value: &Value) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.stdout, value)?;
        writeln!(self.stdout)?;
        Ok(())
    }
}

pub fn pattern_report(raw: &str, pattern: &NamePattern, results: &[(String, bool)]) -> Value {
    json!({
        "pattern": raw,
        "kind": pattern.kind(),
        "description": pattern.to_string(),
        "results": results
            .iter()
            .map(|(name, matched)| json!({ "name": name, "matched": matched }))
            .collect::<Vec<_>>(),
    })
}

pub fn folder_report(
    dir: &Path,
    folders: &[FolderPattern],
    results: &[(String, Vec<&FolderPattern>)],
) -> Value {
    json!({
        "directory": dir.display().to_string(),
        "folders": folders
            .iter()
            .map(|f| json!({ "name": f.name, "kind": f.pattern.kind() }))
            .collect::<Vec<_>>(),
        "results": results
            .iter()
            .map(|(name, matched)| {
                json!({
                    "name": name,
                    "matched": matched.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
                })
            })
            .collect::<Vec<_>>(),
    })
}
