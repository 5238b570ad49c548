//! Reusable prompts using Handlebars for templating. Handlebars adds
//! additional security controls since it can't do much out of the box
//! without registering your own helpers. Strict mode makes a missing
//! field a render error instead of silently rendering nothing.

use std::fmt;

use handlebars::{Handlebars, RenderError};
use serde_json::json;

use crate::office::{FaqTable, OfficeInfo};

#[derive(Debug)]
pub enum Prompt {
    SupportAssistant,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<Prompt> for String {
    fn from(item: Prompt) -> String {
        format!("{:?}", item)
    }
}

const SUPPORT_ASSISTANT_PROMPT: &str = r"
You are the Official Assistant for {{office.name}}.
Office Details: {{office.address}}, Contact: {{office.contact}}, Hours: {{office.hours}}.
Language: {{language}}.

Official Knowledge Base:
{{#each faqs}}
Q: {{question}} A: {{answer}}
{{/each}}

Instructions:
1. Always identify as the assistant for {{office.name}}.
2. Greet users warmly. Use the office details for any location/contact queries.
3. If the answer is not in the knowledge base, provide a professional response.
";

pub fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    // Prompts are plain text sent to the model, not HTML
    registry.register_escape_fn(handlebars::no_escape);
    registry
        .register_template_string(
            &Prompt::SupportAssistant.to_string(),
            SUPPORT_ASSISTANT_PROMPT,
        )
        .expect("Failed to register template");
    registry
}

/// Build the system instruction sent ahead of each user message. The
/// knowledge base section uses the FAQ entries for `language`, or the
/// default language's entries when it has none, but the language line
/// always names the selected language.
pub fn system_instruction(
    language: &str,
    faqs: &FaqTable,
    office: &OfficeInfo,
) -> Result<String, RenderError> {
    let data = json!({
        "office": office,
        "language": language,
        "faqs": faqs.entries_for(language),
    });
    templates().render(&Prompt::SupportAssistant.to_string(), &data)
}
