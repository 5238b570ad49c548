use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::office::OfficeInfo;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub gemini_api_hostname: String,
    // Absent until supplied through the environment or secrets file.
    // Chat interactions fail without it, everything else still works.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub request_timeout_secs: u64,
    pub session_ttl_secs: u64,
    pub office: OfficeInfo,
}

#[derive(Debug, Default, Deserialize)]
struct Secrets {
    #[serde(rename = "GEMINI_API_KEY")]
    gemini_api_key: Option<String>,
}

/// Read the API key from a TOML secrets file. Returns `None` if the
/// file is missing, unparseable, or doesn't contain the key.
pub fn read_secrets_api_key(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let secrets: Secrets = toml::from_str(&contents)
        .inspect_err(|e| tracing::error!("Failed to parse secrets file {}: {}", path.display(), e))
        .ok()?;
    secrets.gemini_api_key.filter(|k| !k.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_secs(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for AppConfig {
    fn default() -> Self {
        let gemini_api_hostname = env_or(
            "HELPDESK_GEMINI_HOST",
            "https://generativelanguage.googleapis.com",
        );
        let gemini_model = env_or("HELPDESK_MODEL", "gemini-3-flash-preview");
        let secrets_path = env_or("HELPDESK_SECRETS_PATH", "./secrets.toml");
        let gemini_api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| read_secrets_api_key(Path::new(&secrets_path)));
        let request_timeout_secs = env_secs("HELPDESK_REQUEST_TIMEOUT_SECS", 120);
        let session_ttl_secs = env_secs("HELPDESK_SESSION_TTL_SECS", 60 * 60);

        let defaults = OfficeInfo::default();
        let office = OfficeInfo {
            name: env_or("HELPDESK_OFFICE_NAME", &defaults.name),
            address: env_or("HELPDESK_OFFICE_ADDRESS", &defaults.address),
            contact: env_or("HELPDESK_OFFICE_CONTACT", &defaults.contact),
            email: env_or("HELPDESK_OFFICE_EMAIL", &defaults.email),
            hours: env_or("HELPDESK_OFFICE_HOURS", &defaults.hours),
            department: env_or("HELPDESK_OFFICE_DEPARTMENT", &defaults.department),
        };

        Self {
            gemini_api_hostname,
            gemini_api_key,
            gemini_model,
            request_timeout_secs,
            session_ttl_secs,
            office,
        }
    }
}
