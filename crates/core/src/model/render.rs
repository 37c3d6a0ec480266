use std::fmt;

/// A run of output text tagged with its role.
///
/// Roles are presentation-neutral: the terminal layer decides how a `Name`
/// or a `Type` looks, the core only decides which text plays which role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    /// Name of a field, argument, type or entry point
    Name(String),
    /// Name of a referenced type
    Type(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(s) | Span::Name(s) | Span::Type(s) => s,
        }
    }
}

/// One line of rendered output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span::Plain(text.into()));
        self
    }

    pub fn name(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span::Name(text.into()));
        self
    }

    pub fn ty(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span::Type(text.into()));
        self
    }

    pub fn extend(mut self, spans: impl IntoIterator<Item = Span>) -> Self {
        self.spans.extend(spans);
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(span.text())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_concatenates_span_text() {
        let line = Line::new().name("id").plain(": ").ty("ID");
        assert_eq!(line.to_string(), "id: ID");
        assert_eq!(
            line.spans(),
            &[
                Span::Name("id".to_string()),
                Span::Plain(": ".to_string()),
                Span::Type("ID".to_string()),
            ]
        );
    }

    #[test]
    fn empty_line_renders_nothing() {
        assert_eq!(Line::new().to_string(), "");
    }
}
