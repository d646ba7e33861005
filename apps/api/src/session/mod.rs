//! Per-session state and the action dispatch state machine.
//!
//! A session moves `Idle -> Awaiting -> Idle`. Every interaction is an [`Event`]
//! applied to the [`SessionContext`]; applying an event never performs I/O; it
//! returns an [`Effect`] that the caller runs, feeding the outcome back as
//! `Event::GenerationFinished`.

pub mod handlers;
pub mod notifications;
pub mod store;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::catalog::Action;
use crate::formatter::format_output;
use notifications::{NotificationKind, NotificationQueue, DEFAULT_CAPACITY};

pub const UPLOAD_SUCCESS: &str = "Resume uploaded and text extracted successfully!";
pub const UPLOAD_EMPTY: &str = "No text could be extracted from this PDF.";
pub const MISSING_RESUME: &str = "Please upload a resume first.";
pub const REQUEST_IN_PROGRESS: &str = "A request is already in progress.";
pub const STALE_RESULT: &str = "Resume changed while generating; the result was discarded.";

/// The uploaded resume. An empty `text` means no resume.
#[derive(Debug, Clone, Default)]
pub struct ResumeText {
    pub file_name: Option<String>,
    pub text: String,
    /// Bumped on every upload.
    pub revision: u64,
}

impl ResumeText {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// What the output panel shows. Empty body means nothing is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputState {
    pub title: String,
    pub body: String,
}

impl OutputState {
    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Awaiting {
        action: Action,
        resume_revision: u64,
    },
}

#[derive(Debug, Clone)]
pub enum Event {
    Upload {
        file_name: Option<String>,
        text: String,
    },
    ActionSelected(Action),
    GenerationFinished {
        action: Action,
        resume_revision: u64,
        /// Generated text, or the failure message shown to the user.
        result: Result<String, String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Generate {
        action: Action,
        prompt: String,
        resume_revision: u64,
    },
}

#[derive(Debug, Clone)]
pub struct SessionContext {
    pub id: Uuid,
    pub resume: ResumeText,
    pub output: OutputState,
    pub phase: Phase,
    pub notifications: NotificationQueue,
    pub last_seen: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(id: Uuid, notification_ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            id,
            resume: ResumeText::default(),
            output: OutputState::default(),
            phase: Phase::Idle,
            notifications: NotificationQueue::new(notification_ttl, DEFAULT_CAPACITY),
            last_seen: now,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Awaiting { .. })
    }

    /// Applies one event and returns the side effect the caller must run.
    pub fn apply(&mut self, event: Event, now: DateTime<Utc>) -> Effect {
        self.last_seen = now;
        self.notifications.prune(now);

        match event {
            Event::Upload { file_name, text } => {
                self.on_upload(file_name, text, now);
                Effect::None
            }
            Event::ActionSelected(action) => self.on_action_selected(action, now),
            Event::GenerationFinished {
                action,
                resume_revision,
                result,
            } => {
                self.on_generation_finished(action, resume_revision, result, now);
                Effect::None
            }
        }
    }

    fn on_upload(&mut self, file_name: Option<String>, text: String, now: DateTime<Utc>) {
        self.resume = ResumeText {
            file_name,
            text,
            revision: self.resume.revision + 1,
        };
        self.output.clear();

        if self.resume.is_empty() {
            self.notifications
                .push(NotificationKind::Error, UPLOAD_EMPTY, now);
        } else {
            self.notifications
                .push(NotificationKind::Success, UPLOAD_SUCCESS, now);
        }
    }

    fn on_action_selected(&mut self, action: Action, now: DateTime<Utc>) -> Effect {
        if self.is_busy() {
            debug!(session = %self.id, %action, "Ignoring action while a request is in flight");
            self.notifications
                .push(NotificationKind::Error, REQUEST_IN_PROGRESS, now);
            return Effect::None;
        }

        if self.resume.is_empty() {
            self.notifications
                .push(NotificationKind::Error, MISSING_RESUME, now);
            return Effect::None;
        }

        self.output.clear();
        let resume_revision = self.resume.revision;
        self.phase = Phase::Awaiting {
            action,
            resume_revision,
        };

        Effect::Generate {
            action,
            prompt: action.prompt(&self.resume.text),
            resume_revision,
        }
    }

    fn on_generation_finished(
        &mut self,
        action: Action,
        resume_revision: u64,
        result: Result<String, String>,
        now: DateTime<Utc>,
    ) {
        let expected = Phase::Awaiting {
            action,
            resume_revision,
        };
        if self.phase != expected {
            warn!(session = %self.id, %action, "Dropping generation result with no matching request");
            return;
        }
        self.phase = Phase::Idle;

        if resume_revision != self.resume.revision {
            self.notifications
                .push(NotificationKind::Error, STALE_RESULT, now);
            return;
        }

        match result {
            Ok(raw) => {
                self.output = OutputState {
                    title: action.title().to_string(),
                    body: format_output(action, &raw),
                };
                self.notifications
                    .push(NotificationKind::Success, action.success_message(), now);
            }
            Err(message) => {
                self.notifications.push(
                    NotificationKind::Error,
                    format!("Gemini API Error: {message}"),
                    now,
                );
            }
        }
    }
}
