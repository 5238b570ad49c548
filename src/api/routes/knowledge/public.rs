//! Public types for the knowledge base API
use serde::{Deserialize, Serialize};

use crate::office::{FaqEntry, OfficeInfo};

#[derive(Deserialize)]
pub struct KnowledgeQuery {
    pub language: Option<String>,
}

#[derive(Serialize)]
pub struct KnowledgeResponse {
    pub office: OfficeInfo,
    pub language: String,
    pub faqs: Vec<FaqEntry>,
}
