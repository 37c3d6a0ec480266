use nu_ansi_term::Color;
use reedline::{Prompt, PromptEditMode, PromptHistorySearch};
use std::borrow::Cow;

pub struct SchemaPrompt {
    schema_label: String,
    styled: bool,
}

impl SchemaPrompt {
    pub fn new(schema_label: impl Into<String>, styled: bool) -> Self {
        Self {
            schema_label: schema_label.into(),
            styled,
        }
    }
}

impl Prompt for SchemaPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        if !self.styled {
            return Cow::Owned(format!("schemascope {} > ", self.schema_label));
        }
        let prefix = Color::LightBlue.bold().paint("schemascope");
        let label = Color::Yellow.paint(self.schema_label.as_str());
        Cow::Owned(format!("{} {} > ", prefix, label))
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(".. ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        _history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        Cow::Borrowed("(search) ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_prompt_names_schema() {
        let prompt = SchemaPrompt::new("api.graphql", false);
        assert_eq!(prompt.render_prompt_left(), "schemascope api.graphql > ");
    }
}
