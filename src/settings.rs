//! Deck settings
//!
//! Read once at startup from an inline JSON element on the page. Never written back.

use serde::{Deserialize, Serialize};

use crate::error::LessonResult;

/// What the deck shows when it is reopened after being closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResumePolicy {
    /// Reopen on the lesson that was showing when the deck closed
    #[default]
    ResumeLastViewed,
    /// Always reopen on the first lesson
    RestartFromFirst,
}

impl ResumePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResumePolicy::ResumeLastViewed => "resume_last_viewed",
            ResumePolicy::RestartFromFirst => "restart_from_first",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "resume" | "resume_last_viewed" => Some(ResumePolicy::ResumeLastViewed),
            "restart" | "restart_from_first" => Some(ResumePolicy::RestartFromFirst),
            _ => None,
        }
    }
}

/// Slide deck configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckSettings {
    pub resume_policy: ResumePolicy,
    /// Delay before the entry transition flag is raised (ms)
    pub entry_delay_ms: u32,
    /// Skip the entry transition delay
    pub reduced_motion: bool,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            resume_policy: ResumePolicy::ResumeLastViewed,
            entry_delay_ms: 10,
            reduced_motion: false,
        }
    }
}

impl DeckSettings {
    /// Parse settings; missing fields take their defaults
    pub fn from_json(json: &str) -> LessonResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Entry delay actually applied (respects reduced_motion)
    pub fn effective_entry_delay_ms(&self) -> u32 {
        if self.reduced_motion {
            0
        } else {
            self.entry_delay_ms
        }
    }

    /// Element holding the inline settings JSON
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "deck-settings";

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded deck settings ({})", settings.resume_policy.as_str());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring deck settings: {}", e),
            }
        }

        log::info!("Using default deck settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
