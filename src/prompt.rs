//! Prompt templates with `{name}` placeholders.
//!
//! Substitution is a single literal pass: values are inserted as-is and never
//! scanned for further placeholders. Brace text that is not a valid
//! placeholder name (e.g. `{ }` or `{a-b}`) is kept literally.

use thiserror::Error;

use crate::llm::{Conversation, Message};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("missing value for prompt variable '{0}'")]
    MissingVariable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A prompt with named placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    pub fn new(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            match after.find('}') {
                Some(close) if is_placeholder_name(&after[..close]) => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(after[..close].to_string()));
                    rest = &after[close + 1..];
                }
                _ => {
                    literal.push('{');
                    rest = after;
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    /// Placeholder names in first-seen order, without duplicates.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment
                && !names.contains(&name.as_str())
            {
                names.push(name.as_str());
            }
        }
        names
    }

    /// Substitutes every placeholder with its value from `vars`.
    ///
    /// Extra entries in `vars` are ignored.
    pub fn render(&self, vars: &[(&str, &str)]) -> Result<String, PromptError> {
        let mut output = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Placeholder(name) => {
                    let value = vars
                        .iter()
                        .find(|(key, _)| *key == name.as_str())
                        .map(|(_, value)| *value)
                        .ok_or_else(|| PromptError::MissingVariable(name.clone()))?;
                    output.push_str(value);
                }
            }
        }
        Ok(output)
    }
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A system template followed by a human template.
#[derive(Debug, Clone)]
pub struct ChatPromptTemplate {
    system: PromptTemplate,
    human: PromptTemplate,
}

impl ChatPromptTemplate {
    pub fn new(system: &str, human: &str) -> Self {
        Self {
            system: PromptTemplate::new(system),
            human: PromptTemplate::new(human),
        }
    }

    /// Renders both templates into a two-message conversation.
    pub fn format_messages(&self, vars: &[(&str, &str)]) -> Result<Conversation, PromptError> {
        let system = self.system.render(vars)?;
        let human = self.human.render(vars)?;
        Ok(Conversation::new(vec![
            Message::system(system),
            Message::user(human),
        ]))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::llm::Role;

    #[test]
    fn test_render_substitutes_all_placeholders() {
        let template =
            PromptTemplate::new("translates {input_language} to {output_language}.");
        let rendered = template
            .render(&[("input_language", "English"), ("output_language", "Hebrew")])
            .unwrap();
        assert_eq!(rendered, "translates English to Hebrew.");
    }

    #[test]
    fn test_render_repeated_placeholder() {
        let template = PromptTemplate::new("{x} and {x}");
        assert_eq!(template.render(&[("x", "1")]).unwrap(), "1 and 1");
        assert_eq!(template.placeholders(), vec!["x"]);
    }

    #[test]
    fn test_render_missing_variable() {
        let template = PromptTemplate::new("Hello {name}, today is {day}");
        let err = template.render(&[("name", "Ada")]).unwrap_err();
        assert_eq!(err, PromptError::MissingVariable("day".to_string()));
    }

    #[test]
    fn test_render_does_not_expand_values() {
        let template = PromptTemplate::new("{text}");
        let value = "translates {input_language} to {output_language}";
        let rendered = template
            .render(&[("text", value), ("input_language", "English")])
            .unwrap();
        assert_eq!(rendered, value);
    }

    #[test]
    fn test_non_placeholder_braces_are_literal() {
        let template = PromptTemplate::new("fn main() { println!(\"{}\") } {a-b} {ok}");
        assert_eq!(template.placeholders(), vec!["ok"]);
        assert_eq!(
            template.render(&[("ok", "yes")]).unwrap(),
            "fn main() { println!(\"{}\") } {a-b} yes"
        );
    }

    #[test]
    fn test_unclosed_brace_is_literal() {
        let template = PromptTemplate::new("open {brace");
        assert!(template.placeholders().is_empty());
        assert_eq!(template.render(&[]).unwrap(), "open {brace");
    }

    #[test]
    fn test_quoted_placeholder() {
        let template = PromptTemplate::new("prints the text '{text}' {repetitions} times");
        assert_eq!(
            template
                .render(&[("text", "hi"), ("repetitions", "3")])
                .unwrap(),
            "prints the text 'hi' 3 times"
        );
    }

    #[test]
    fn test_chat_prompt_builds_system_then_human() {
        let prompt = ChatPromptTemplate::new("You translate to {lang}.", "{text}");
        let conversation = prompt
            .format_messages(&[("lang", "Yiddish"), ("text", "Hi")])
            .unwrap();

        let messages = conversation.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "You translate to Yiddish.");
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "Hi");
    }

    #[test]
    fn test_chat_prompt_fails_when_human_variable_missing() {
        let prompt = ChatPromptTemplate::new("You translate to {lang}.", "{text}");
        let err = prompt.format_messages(&[("lang", "Yiddish")]).unwrap_err();
        assert_eq!(err, PromptError::MissingVariable("text".to_string()));
    }
}
