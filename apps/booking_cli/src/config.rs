use std::fs;

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub endpoint_url: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint_url: "http://127.0.0.1:3000/api/book-room".into(),
            request_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    endpoint_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Defaults, overridden by `booking.toml` in the working directory,
/// overridden in turn by environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("booking.toml") {
        apply_file(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("BOOKING_ENDPOINT_URL") {
        settings.endpoint_url = v;
    }
    if let Ok(v) = std::env::var("BOOKING_REQUEST_TIMEOUT_SECS") {
        if let Ok(secs) = v.parse() {
            settings.request_timeout_secs = secs;
        }
    }

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<FileSettings>(raw) {
        if let Some(v) = file_cfg.endpoint_url {
            settings.endpoint_url = v;
        }
        if let Some(v) = file_cfg.request_timeout_secs {
            settings.request_timeout_secs = v;
        }
    }
}
