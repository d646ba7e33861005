//! Session views served to the page.
//!
//! The page re-renders from these views; it never derives state on its own.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::catalog::Action;
use crate::session::notifications::{Notification, NotificationKind};
use crate::session::{OutputState, Phase, SessionContext};

pub const DOWNLOAD_MIME: &str = "text/plain";

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub resume: ResumeView,
    pub busy: bool,
    pub pending_action: Option<Action>,
    pub output: Option<OutputView>,
    pub notifications: Vec<NotificationView>,
}

#[derive(Debug, Serialize)]
pub struct ResumeView {
    pub loaded: bool,
    pub file_name: Option<String>,
    pub characters: usize,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct OutputView {
    pub title: String,
    pub body: String,
    pub download: DownloadView,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DownloadView {
    pub file_name: String,
    pub url: String,
    pub mime: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NotificationView {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub color: &'static str,
    pub expires_at: DateTime<Utc>,
}

/// `"Career Role Suggestions"` -> `"career_role_suggestions.txt"`.
pub fn download_file_name(title: &str) -> String {
    format!("{}.txt", title.to_lowercase().replace(' ', "_"))
}

pub fn download_url(session_id: Uuid) -> String {
    format!("/api/v1/sessions/{session_id}/output/download")
}

/// Nothing is rendered until a generation has succeeded.
pub fn render_output(session_id: Uuid, output: &OutputState) -> Option<OutputView> {
    if output.is_empty() {
        return None;
    }

    Some(OutputView {
        title: output.title.clone(),
        body: output.body.clone(),
        download: DownloadView {
            file_name: download_file_name(&output.title),
            url: download_url(session_id),
            mime: DOWNLOAD_MIME,
        },
    })
}

fn render_notification(notification: &Notification) -> NotificationView {
    NotificationView {
        id: notification.id,
        kind: notification.kind,
        message: notification.message.clone(),
        color: notification.kind.color(),
        expires_at: notification.expires_at,
    }
}

/// Renders the session, dropping notifications that have expired by `now`.
pub fn render(ctx: &mut SessionContext, now: DateTime<Utc>) -> SessionView {
    ctx.notifications.prune(now);

    let pending_action = match ctx.phase {
        Phase::Awaiting { action, .. } => Some(action),
        Phase::Idle => None,
    };

    SessionView {
        session_id: ctx.id,
        resume: ResumeView {
            loaded: !ctx.resume.is_empty(),
            file_name: ctx.resume.file_name.clone(),
            characters: ctx.resume.text.chars().count(),
        },
        busy: ctx.is_busy(),
        pending_action,
        output: render_output(ctx.id, &ctx.output),
        notifications: ctx.notifications.iter().map(render_notification).collect(),
    }
}
