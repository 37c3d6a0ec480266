use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};
use std::collections::HashSet;

pub struct SchemaHighlighter {
    names: HashSet<String>,
    directives: HashSet<String>,
}

impl SchemaHighlighter {
    pub fn new(
        names: impl IntoIterator<Item = String>,
        directives: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            names: names.into_iter().collect(),
            directives: directives.into_iter().collect(),
        }
    }

    fn style_for(&self, word: &str) -> Style {
        if self.names.contains(word) {
            Style::new().fg(Color::LightGreen).bold()
        } else if self.directives.contains(word) {
            Style::new().fg(Color::Cyan)
        } else {
            Style::new()
        }
    }
}

impl Highlighter for SchemaHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled_text = StyledText::new();

        // Surrounding whitespace stays unstyled so the buffer length is preserved
        let word = line.trim();
        let leading = line.len() - line.trim_start().len();
        let trailing_start = leading + word.len();

        if leading > 0 {
            styled_text.push((Style::new(), line[..leading].to_string()));
        }
        if !word.is_empty() {
            styled_text.push((self.style_for(word), word.to_string()));
        }
        if trailing_start < line.len() {
            styled_text.push((Style::new(), line[trailing_start..].to_string()));
        }

        styled_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighter() -> SchemaHighlighter {
        SchemaHighlighter::new(
            vec!["User".to_string(), "user".to_string()],
            vec![".types".to_string(), ".help".to_string()],
        )
    }

    #[test]
    fn known_names_are_green() {
        let styled = highlighter().highlight(" User ", 0);
        assert_eq!(styled.buffer.len(), 3);
        assert_eq!(styled.buffer[1].1, "User");
        assert_eq!(styled.buffer[1].0, Style::new().fg(Color::LightGreen).bold());
    }

    #[test]
    fn directives_are_cyan() {
        let styled = highlighter().highlight(".types", 0);
        assert_eq!(styled.buffer, vec![(Style::new().fg(Color::Cyan), ".types".to_string())]);
    }

    #[test]
    fn partial_input_is_unstyled() {
        let styled = highlighter().highlight("Use", 3);
        assert_eq!(styled.buffer, vec![(Style::new(), "Use".to_string())]);
    }
}
