use nu_ansi_term::Style;
use schemascope_core::{Line, Span};

/// Turns rendered lines into terminal text.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    styled: bool,
}

impl Painter {
    pub fn styled() -> Self {
        Self { styled: true }
    }

    pub fn plain() -> Self {
        Self { styled: false }
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// Names are bold and type names italic; plain mode emits the bare text.
    pub fn paint(&self, line: &Line) -> String {
        if !self.styled {
            return line.to_string();
        }

        let mut out = String::new();
        for span in line.spans() {
            match span {
                Span::Plain(text) => out.push_str(text),
                Span::Name(text) => out.push_str(&Style::new().bold().paint(text).to_string()),
                Span::Type(text) => out.push_str(&Style::new().italic().paint(text).to_string()),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_painter_emits_bare_text() {
        let line = Line::new().name("id").plain(": ").ty("ID");
        assert_eq!(Painter::plain().paint(&line), "id: ID");
    }

    #[test]
    fn styled_painter_wraps_names_and_types() {
        let line = Line::new().name("id").plain(": ").ty("ID");
        let painted = Painter::styled().paint(&line);
        assert_eq!(
            painted,
            format!(
                "{}: {}",
                Style::new().bold().paint("id"),
                Style::new().italic().paint("ID")
            )
        );
        assert_ne!(painted, "id: ID");
    }
}
