//! Slide deck navigation
//!
//! The deck is either hidden or showing one lesson. Navigation past either end is a
//! no-op. The entry transition flag is raised one deferred tick after opening, via an
//! [`EntryTicket`] the shell hands back when its timer fires.

use serde::{Deserialize, Serialize};

use crate::error::{LessonError, LessonResult};
use crate::settings::{DeckSettings, ResumePolicy};

/// Lessons available in the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonId {
    Reflection,
    Refraction,
}

impl LessonId {
    /// Presentation order of the standard deck
    pub const ALL: [LessonId; 2] = [LessonId::Reflection, LessonId::Refraction];

    pub fn as_str(&self) -> &'static str {
        match self {
            LessonId::Reflection => "reflection",
            LessonId::Refraction => "refraction",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "reflection" => Some(LessonId::Reflection),
            "refraction" => Some(LessonId::Refraction),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LessonId::Reflection => "Reflection of Light (Plane Mirror)",
            LessonId::Refraction => "Refraction of Light",
        }
    }
}

/// Where the deck is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckState {
    Hidden,
    Showing(usize),
}

/// Proof that an entry transition was scheduled by a particular `open()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryTicket {
    generation: u64,
}

/// Ordered lessons plus the navigation automaton
#[derive(Debug, Clone)]
pub struct SlideDeck {
    lessons: Vec<LessonId>,
    state: DeckState,
    /// Index shown when the deck was last closed
    resume_index: usize,
    entry_animation_active: bool,
    /// Bumped on every open/close so stale entry tickets are ignored
    generation: u64,
    resume_policy: ResumePolicy,
}

impl SlideDeck {
    /// Build a hidden deck. Fails if `lessons` is empty.
    pub fn new(lessons: Vec<LessonId>, resume_policy: ResumePolicy) -> LessonResult<Self> {
        if lessons.is_empty() {
            return Err(LessonError::InvalidParameter {
                field: "lessons",
                value: 0.0,
                min: 1.0,
                max: f64::INFINITY,
            });
        }
        Ok(Self::with_lessons(lessons, resume_policy))
    }

    /// The reflection then refraction deck
    pub fn standard(settings: &DeckSettings) -> Self {
        Self::with_lessons(LessonId::ALL.to_vec(), settings.resume_policy)
    }

    fn with_lessons(lessons: Vec<LessonId>, resume_policy: ResumePolicy) -> Self {
        Self {
            lessons,
            state: DeckState::Hidden,
            resume_index: 0,
            entry_animation_active: false,
            generation: 0,
            resume_policy,
        }
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Always false; construction rejects empty decks
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    pub fn lessons(&self) -> &[LessonId] {
        &self.lessons
    }

    pub fn state(&self) -> DeckState {
        self.state
    }

    pub fn resume_policy(&self) -> ResumePolicy {
        self.resume_policy
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, DeckState::Showing(_))
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            DeckState::Showing(i) => Some(i),
            DeckState::Hidden => None,
        }
    }

    pub fn current_lesson(&self) -> Option<LessonId> {
        self.current_index().map(|i| self.lessons[i])
    }

    pub fn entry_animation_active(&self) -> bool {
        self.entry_animation_active
    }

    /// Show the deck. Returns the ticket to redeem after the entry delay, or `None`
    /// if the deck was already showing.
    pub fn open(&mut self) -> Option<EntryTicket> {
        if self.is_visible() {
            return None;
        }
        let index = match self.resume_policy {
            ResumePolicy::ResumeLastViewed => self.resume_index,
            ResumePolicy::RestartFromFirst => 0,
        };
        self.generation += 1;
        self.entry_animation_active = false;
        self.state = DeckState::Showing(index);
        log::debug!("deck: open at {} ({})", index, self.lessons[index].as_str());
        Some(EntryTicket {
            generation: self.generation,
        })
    }

    /// Raise the entry transition flag. Returns false for a stale ticket.
    pub fn complete_entry(&mut self, ticket: EntryTicket) -> bool {
        if ticket.generation != self.generation || !self.is_visible() {
            log::debug!("deck: ignoring stale entry ticket {}", ticket.generation);
            return false;
        }
        self.entry_animation_active = true;
        true
    }

    /// Hide the deck, remembering where it was
    pub fn close(&mut self) {
        if let DeckState::Showing(i) = self.state {
            self.resume_index = i;
            self.generation += 1;
            log::debug!("deck: close at {}", i);
        }
        self.state = DeckState::Hidden;
        self.entry_animation_active = false;
    }

    /// Advance one lesson. Returns true if the index changed.
    pub fn next(&mut self) -> bool {
        match self.state {
            DeckState::Showing(i) if i + 1 < self.lessons.len() => {
                self.state = DeckState::Showing(i + 1);
                log::debug!("deck: next -> {}", i + 1);
                true
            }
            _ => false,
        }
    }

    /// Go back one lesson. Returns true if the index changed.
    pub fn prev(&mut self) -> bool {
        match self.state {
            DeckState::Showing(i) if i > 0 => {
                self.state = DeckState::Showing(i - 1);
                log::debug!("deck: prev -> {}", i - 1);
                true
            }
            _ => false,
        }
    }

    /// Jump to a lesson while showing. Returns true if the index changed.
    pub fn go_to(&mut self, index: usize) -> LessonResult<bool> {
        if index >= self.lessons.len() {
            return Err(LessonError::InvalidParameter {
                field: "index",
                value: index as f64,
                min: 0.0,
                max: (self.lessons.len() - 1) as f64,
            });
        }
        match self.state {
            DeckState::Showing(i) if i != index => {
                self.state = DeckState::Showing(index);
                log::debug!("deck: go_to {}", index);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Whether the previous-lesson control should be shown
    pub fn can_go_prev(&self) -> bool {
        matches!(self.state, DeckState::Showing(i) if i > 0)
    }

    /// Whether the next-lesson control should be shown
    pub fn can_go_next(&self) -> bool {
        matches!(self.state, DeckState::Showing(i) if i + 1 < self.lessons.len())
    }
}
