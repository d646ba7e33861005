//! Axum route handlers for the session API.

use axum::{
    extract::{multipart::MultipartError, Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::catalog::Action;
use crate::errors::AppError;
use crate::extraction::{extract_resume_text, is_pdf_upload};
use crate::presenter::{download_file_name, render, SessionView, DOWNLOAD_MIME};
use crate::session::{Effect, Event};
use crate::state::AppState;

/// Multipart field carrying the PDF.
pub const RESUME_FIELD: &str = "resume";

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

/// Oversized bodies become 413; every other multipart failure is a bad request.
fn multipart_error(e: MultipartError, limit: usize, context: &str) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("Upload exceeds the {limit} byte limit"))
    } else {
        AppError::Validation(format!("{context}: {e}"))
    }
}

async fn current_view(state: &AppState, id: Uuid) -> Result<SessionView, AppError> {
    let now = Utc::now();
    state
        .sessions
        .with_session(id, |ctx| render(ctx, now))
        .await
        .ok_or_else(|| session_not_found(id))
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let id = state.sessions.create(Utc::now()).await;
    let view = current_view(&state, id).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    Ok(Json(current_view(&state, id).await?))
}

/// POST /api/v1/sessions/:id/resume
///
/// Accepts a single PDF in the `resume` multipart field and replaces the
/// session's resume text. A PDF that cannot be read leaves the session untouched.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<SessionView>, AppError> {
    if !state.sessions.contains(id).await {
        return Err(session_not_found(id));
    }

    let limit = state.config.max_upload_bytes;
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit, "Invalid multipart body"))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        if !is_pdf_upload(file_name.as_deref(), field.content_type()) {
            return Err(AppError::Validation(
                "Only PDF resumes are accepted".to_string(),
            ));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, limit, "Could not read upload"))?;
        upload = Some((file_name, bytes));
        break;
    }

    let (file_name, bytes) = upload.ok_or_else(|| {
        AppError::Validation(format!("Multipart field '{RESUME_FIELD}' is required"))
    })?;
    if bytes.is_empty() {
        return Err(AppError::Validation("Uploaded file is empty".to_string()));
    }

    let text = extract_resume_text(bytes).await?;
    info!(session = %id, file = ?file_name, "Resume uploaded");

    state
        .sessions
        .apply(id, Event::Upload { file_name, text }, Utc::now())
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(current_view(&state, id).await?))
}

/// POST /api/v1/sessions/:id/actions/:action
///
/// Always answers with the session view: a missing resume or a failed
/// generation shows up as a notification, not as an HTTP error.
pub async fn handle_dispatch_action(
    State(state): State<AppState>,
    Path((id, action)): Path<(Uuid, String)>,
) -> Result<Json<SessionView>, AppError> {
    let action = action
        .parse::<Action>()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let effect = state
        .sessions
        .apply(id, Event::ActionSelected(action), Utc::now())
        .await
        .ok_or_else(|| session_not_found(id))?;

    if let Effect::Generate {
        action,
        prompt,
        resume_revision,
    } = effect
    {
        info!(session = %id, %action, "Generating");
        let task = spawn_generation(&state, id, action, prompt, resume_revision);
        if let Err(e) = task.await {
            error!(session = %id, %action, "Generation driver failed: {e}");
        }
    }

    Ok(Json(current_view(&state, id).await?))
}

/// Runs the generation call and applies its outcome to the session.
///
/// Detached from the request so a dropped connection cannot leave the session
/// stuck in `Awaiting`; a panicking generator is reported as a failure.
fn spawn_generation(
    state: &AppState,
    id: Uuid,
    action: Action,
    prompt: String,
    resume_revision: u64,
) -> JoinHandle<()> {
    let sessions = state.sessions.clone();
    let generator = state.generator.clone();

    tokio::spawn(async move {
        let call = tokio::spawn(async move {
            generator
                .generate(&prompt)
                .await
                .map_err(|e| e.to_string())
        });

        let result = match call.await {
            Ok(result) => result,
            Err(e) => Err(format!("generation task failed: {e}")),
        };
        if let Err(message) = &result {
            warn!(session = %id, %action, "Generation failed: {message}");
        }

        let finished = Event::GenerationFinished {
            action,
            resume_revision,
            result,
        };
        if sessions.apply(id, finished, Utc::now()).await.is_none() {
            warn!(session = %id, "Session vanished before generation finished");
        }
    })
}

/// GET /api/v1/sessions/:id/output/download
pub async fn handle_download_output(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let output = state
        .sessions
        .with_session(id, |ctx| ctx.output.clone())
        .await
        .ok_or_else(|| session_not_found(id))?;

    if output.is_empty() {
        return Err(AppError::NotFound("No output to download".to_string()));
    }

    let disposition = format!(
        "attachment; filename=\"{}\"",
        download_file_name(&output.title)
    );
    Ok((
        [
            (header::CONTENT_TYPE, format!("{DOWNLOAD_MIME}; charset=utf-8")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        output.body,
    )
        .into_response())
}
