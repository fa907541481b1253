//! Page-level tunables and user-facing copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page may embed a `<script type="application/json" id="portfolio-config">`
//! block to override any of these values. Every field is defaulted, so a
//! partial block only changes what it names and a missing block changes
//! nothing.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;
use crate::state::nav::DEFAULT_BREAKPOINT_PX;

/// Timing and layout settings for the page controller.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioConfig {
    /// Link clicks at or below this viewport width collapse the mobile menu.
    pub nav_breakpoint_px: f64,
    /// How long a toast stays visible.
    pub toast_duration_ms: u32,
    /// Simulated network latency for the contact form.
    pub send_delay_ms: u32,
    /// Delay before focusing the name field after the quick-contact scroll.
    pub contact_focus_delay_ms: u32,
    pub messages: Messages,
}

impl PortfolioConfig {
    /// Id of the optional JSON script block carrying overrides.
    pub const ELEMENT_ID: &'static str = "portfolio-config";

    /// Parse an override block. Unknown keys are ignored.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(trimmed)?)
    }
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            nav_breakpoint_px: DEFAULT_BREAKPOINT_PX,
            toast_duration_ms: 4200,
            send_delay_ms: 1000,
            contact_focus_delay_ms: 400,
            messages: Messages::default(),
        }
    }
}

/// Fixed user-facing strings.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Messages {
    pub name_too_short: String,
    pub invalid_email: String,
    pub message_too_short: String,
    pub form_incomplete_toast: String,
    pub sending: String,
    pub sent: String,
    pub sent_toast: String,
    pub live_demo_prefix: String,
    pub repository_prefix: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            name_too_short: "Nama minimal 2 karakter.".to_owned(),
            invalid_email: "Email tidak valid.".to_owned(),
            message_too_short: "Pesan minimal 10 karakter.".to_owned(),
            form_incomplete_toast: "Periksa form — ada isian yang kurang.".to_owned(),
            sending: "Mengirim...".to_owned(),
            sent: "Terkirim! Terima kasih — saya akan membalas segera.".to_owned(),
            sent_toast: "Pesan berhasil dikirim ✔".to_owned(),
            live_demo_prefix: "Membuka demo: ".to_owned(),
            repository_prefix: "Membuka repo: ".to_owned(),
        }
    }
}
