//! TerminalRenderer: writes frames and messages to a terminal (or any sink).
//!
//! The game is line-oriented, so every draw prints the whole board below the
//! previous output instead of repainting in place.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write> {
    out: W,
    color: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(color: bool) -> Self {
        Self::new(io::stdout(), color)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Draw a board followed by its legend, framed by blank lines.
    pub fn draw(&mut self, fb: &FrameBuffer, legend: &str) -> Result<()> {
        self.buf.clear();
        self.buf.push(b'\n');
        if self.color {
            encode_styled_into(fb, &mut self.buf)?;
        } else {
            let mut text = String::new();
            encode_plain_into(fb, &mut text);
            self.buf.extend_from_slice(text.as_bytes());
        }
        self.buf.push(b'\n');
        self.buf.extend_from_slice(legend.as_bytes());
        self.buf.push(b'\n');
        self.flush_buf()
    }

    /// Print one line of text.
    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    /// Print a prompt without a trailing newline.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a frame as plain text, one line per row.
pub fn encode_plain_into(fb: &FrameBuffer, out: &mut String) {
    for y in 0..fb.height() {
        out.extend(fb.row(y).iter().map(|c| c.ch));
        out.push('\n');
    }
}

/// Encode a frame with colour escapes, one line per row.
///
/// Style changes are only emitted when the style differs from the previous cell.
pub fn encode_styled_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    for y in 0..fb.height() {
        let mut current_style: Option<CellStyle> = None;
        for cell in fb.row(y) {
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(Print('\n'))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    fn sample() -> FrameBuffer {
        let mut fb = FrameBuffer::new(2, 2);
        let style = CellStyle::default();
        fb.set(0, 0, Cell { ch: 'A', style });
        fb.set(1, 0, Cell { ch: 'B', style });
        fb.set(0, 1, Cell { ch: 'C', style });
        fb.set(1, 1, Cell { ch: 'D', style });
        fb
    }

    #[test]
    fn plain_encoding_is_row_major() {
        let mut text = String::new();
        encode_plain_into(&sample(), &mut text);
        assert_eq!(text, "AB\nCD\n");
    }

    #[test]
    fn styled_encoding_keeps_glyphs_and_escapes() {
        let mut out = Vec::new();
        encode_styled_into(&sample(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("AB"));
        assert!(text.contains("CD"));
        assert!(text.contains('\u{1b}'));
        assert_eq!(text.matches('\n').count(), 2);
    }

    #[test]
    fn plain_renderer_writes_board_and_legend() {
        let mut term = TerminalRenderer::new(Vec::new(), false);
        term.draw(&sample(), "legend").unwrap();
        term.prompt("> ").unwrap();
        let text = String::from_utf8(term.into_inner()).unwrap();
        assert_eq!(text, "\nAB\nCD\n\nlegend\n> ");
    }

    #[test]
    fn style_conversion() {
        let style = CellStyle::default();
        assert_eq!(
            rgb_to_color(style.fg),
            Color::Rgb {
                r: style.fg.r,
                g: style.fg.g,
                b: style.fg.b
            }
        );
    }
}
