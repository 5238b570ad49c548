//! The office knowledge base: who the office is and the FAQ entries
//! the assistant is given as context for each language.

use serde::Serialize;

/// Language used when the selected one has no FAQ entries.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Options offered by the language selector. Not every option has
/// its own FAQ entries.
pub const SUPPORTED_LANGUAGES: [&str; 3] = ["English", "Spanish", "French"];

pub fn is_supported_language(language: &str) -> bool {
    SUPPORTED_LANGUAGES.contains(&language)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OfficeInfo {
    pub name: String,
    pub address: String,
    pub contact: String,
    pub email: String,
    pub hours: String,
    pub department: String,
}

impl Default for OfficeInfo {
    fn default() -> Self {
        Self {
            name: String::from("Om Dammewar's AI Lab & Office"),
            address: String::from("Pune, Maharashtra, India"),
            contact: String::from("+91-XXXXXXXXXX"),
            email: String::from("om.dammewar@example.com"),
            hours: String::from("Mon-Fri: 9 AM - 6 PM | Sat: 10 AM - 2 PM"),
            department: String::from("IoT, Web Development, and AI Research"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// Read-only mapping of language to an ordered list of FAQ entries.
#[derive(Clone, Debug, Default)]
pub struct FaqTable(Vec<(String, Vec<FaqEntry>)>);

impl FaqTable {
    /// The stock FAQ answers, filled in from the office details.
    pub fn for_office(office: &OfficeInfo) -> Self {
        let english = vec![
            FaqEntry::new(
                "Where is the office?",
                &format!("We are located at {}.", office.address),
            ),
            FaqEntry::new(
                "How can I reach you?",
                &format!(
                    "You can call us at {} or email {}.",
                    office.contact, office.email
                ),
            ),
            FaqEntry::new(
                "What are your hours?",
                &format!("Our working hours are {}.", office.hours),
            ),
            FaqEntry::new(
                "What do you do?",
                &format!("Our office specializes in {}.", office.department),
            ),
        ];
        let spanish = vec![FaqEntry::new(
            "¿Dónde está la oficina?",
            &format!("Estamos ubicados en {}.", office.address),
        )];

        Self(vec![
            (String::from("English"), english),
            (String::from("Spanish"), spanish),
        ])
    }

    /// Entries for `language`, or the default language's entries
    /// when there are none.
    pub fn entries_for(&self, language: &str) -> &[FaqEntry] {
        let lookup = |lang: &str| {
            self.0
                .iter()
                .find(|(l, entries)| l == lang && !entries.is_empty())
                .map(|(_, entries)| entries.as_slice())
        };
        lookup(language)
            .or_else(|| lookup(DEFAULT_LANGUAGE))
            .unwrap_or(&[])
    }
}
