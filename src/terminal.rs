//! Terminal output using crossterm
//!
//! Renders painted lines with ANSI colors, or dumps raw spans.

use std::io::Write;

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::{Format, FormatSpan, StyledRun};

/// Parse a `#rgb` or `#rrggbb` color
pub fn parse_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let r = channel(&hex[0..1])?;
            let g = channel(&hex[1..2])?;
            let b = channel(&hex[2..3])?;
            Some(Color::Rgb {
                r: r * 17,
                g: g * 17,
                b: b * 17,
            })
        }
        6 => Some(Color::Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        _ => None,
    }
}

/// Writer for highlighted output
pub struct Terminal<W: Write> {
    out: W,
    /// Emit escape sequences; plain text otherwise
    color: bool,
}

impl<W: Write> Terminal<W> {
    /// Create a terminal over any writer
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Write one painted line followed by a newline
    pub fn write_line(&mut self, line: &str, runs: &[StyledRun]) -> Result<()> {
        for run in runs {
            let text = run.text(line);
            match &run.format {
                Some(format) if self.color => self.write_styled(text, format)?,
                _ => queue!(self.out, Print(text))?,
            }
        }
        queue!(self.out, Print("\n"))?;
        Ok(())
    }

    /// Write the raw spans of one line, one per row
    pub fn write_spans(&mut self, line_no: usize, line: &str, spans: &[FormatSpan]) -> Result<()> {
        for span in spans {
            let row = format!(
                "{}:{}\t{}\t{}\t{}\t{:?}\n",
                line_no,
                span.start,
                span.len,
                span.category,
                span.format.color,
                &line[span.start..span.end()],
            );
            queue!(self.out, Print(row))?;
        }
        Ok(())
    }

    /// Flush pending output
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Consume the terminal, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_styled(&mut self, text: &str, format: &Format) -> Result<()> {
        if let Some(color) = parse_color(&format.color) {
            queue!(self.out, SetForegroundColor(color))?;
        }
        if format.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if format.italic {
            queue!(self.out, SetAttribute(Attribute::Italic))?;
        }
        queue!(self.out, Print(text), SetAttribute(Attribute::Reset), ResetColor)?;
        Ok(())
    }
}
