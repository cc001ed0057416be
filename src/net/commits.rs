//! Last-commit timestamp for the "last updated" footer.
//!
//! One `GET` to the GitHub commits endpoint for the configured repository,
//! asking only for the newest commit. The outcome collapses into
//! [`CommitStatus`] and is rendered as either a `DD-MM-YYYY HH:MM` string or
//! one of two fallback literals.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns an error to the caller. Transport failures, unreadable
//! bodies, and payloads without a usable timestamp all become
//! [`CommitStatus::NetworkError`]; non-2xx responses become
//! [`CommitStatus::Unavailable`].

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "commits_test.rs"]
mod commits_test;

use serde::Deserialize;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::config::CommitSettings;

/// Shown when the API answers with a non-success status.
pub const UNAVAILABLE_TEXT: &str = "API unavailable";
/// Shown when the request or its payload fails.
pub const NETWORK_ERROR_TEXT: &str = "Unable to fetch";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("response body unreadable: {0}")]
    Body(String),
    #[error("unexpected payload: {0}")]
    Payload(String),
}

/// Status code and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can perform the commits request.
pub trait CommitSource {
    /// # Errors
    ///
    /// Returns an error when no HTTP response could be obtained.
    async fn get(&self, url: &str) -> Result<HttpReply, FetchError>;
}

/// Element that displays the rendered status.
pub trait TextTarget {
    fn set_text(&self, text: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStatus {
    Success(OffsetDateTime),
    Unavailable,
    NetworkError,
}

#[derive(Deserialize)]
struct CommitEntry {
    commit: CommitDetail,
}

#[derive(Deserialize)]
struct CommitDetail {
    author: CommitSignature,
}

#[derive(Deserialize)]
struct CommitSignature {
    date: String,
}

/// Endpoint listing only the newest commit of `repo` (`owner/name`).
#[must_use]
pub fn commits_url(api_base: &str, repo: &str) -> String {
    format!("{}/repos/{repo}/commits?per_page=1", api_base.trim_end_matches('/'))
}

/// Request URL when the last-updated feature should run.
///
/// `None` when no repository is configured or the display element is absent.
#[must_use]
pub fn last_updated_url(settings: &CommitSettings, element_present: bool) -> Option<String> {
    let Some(repo) = settings.repo.as_deref() else {
        log::debug!("no commit repo configured; last-updated skipped");
        return None;
    };
    if !element_present {
        log::debug!("#{} not found; last-updated skipped", settings.element_id);
        return None;
    }
    Some(commits_url(&settings.api_base, repo))
}

/// Author timestamp of the first commit in a commits-list payload.
///
/// # Errors
///
/// Returns [`FetchError::Payload`] if the body is not a non-empty commit list
/// with an RFC 3339 author date.
pub fn parse_latest(body: &str) -> Result<OffsetDateTime, FetchError> {
    let entries: Vec<CommitEntry> = serde_json::from_str(body).map_err(|e| FetchError::Payload(e.to_string()))?;
    let latest = entries.into_iter().next().ok_or_else(|| FetchError::Payload("no commits".to_owned()))?;
    OffsetDateTime::parse(&latest.commit.author.date, &Rfc3339).map_err(|e| FetchError::Payload(e.to_string()))
}

/// Collapse a request outcome into a display status.
#[must_use]
pub fn classify(reply: Result<HttpReply, FetchError>) -> CommitStatus {
    let reply = match reply {
        Ok(reply) => reply,
        Err(e) => {
            log::warn!("last commit fetch failed: {e}");
            return CommitStatus::NetworkError;
        }
    };
    if !reply.ok() {
        log::warn!("last commit fetch returned status {}", reply.status);
        return CommitStatus::Unavailable;
    }
    match parse_latest(&reply.body) {
        Ok(ts) => CommitStatus::Success(ts),
        Err(e) => {
            log::warn!("last commit fetch: {e}");
            CommitStatus::NetworkError
        }
    }
}

/// `DD-MM-YYYY HH:MM` in the given offset.
#[must_use]
pub fn format_timestamp(ts: OffsetDateTime, offset: UtcOffset) -> String {
    let format = format_description!("[day]-[month]-[year] [hour]:[minute]");
    ts.to_offset(offset).format(format).unwrap_or_else(|e| {
        log::warn!("last commit timestamp not formattable: {e}");
        NETWORK_ERROR_TEXT.to_owned()
    })
}

#[must_use]
pub fn render(status: CommitStatus, offset: UtcOffset) -> String {
    match status {
        CommitStatus::Success(ts) => format_timestamp(ts, offset),
        CommitStatus::Unavailable => UNAVAILABLE_TEXT.to_owned(),
        CommitStatus::NetworkError => NETWORK_ERROR_TEXT.to_owned(),
    }
}

/// Offset from a JavaScript `getTimezoneOffset()` value (minutes behind UTC).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn offset_from_js_minutes(minutes_behind_utc: f64) -> UtcOffset {
    if !minutes_behind_utc.is_finite() {
        return UtcOffset::UTC;
    }
    let seconds = (-minutes_behind_utc * 60.0).round() as i32;
    UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
}

/// Fetch, classify, and display the last commit time.
pub async fn refresh_last_updated(
    source: &impl CommitSource,
    target: &impl TextTarget,
    url: &str,
    offset: UtcOffset,
) -> CommitStatus {
    let status = classify(source.get(url).await);
    target.set_text(&render(status, offset));
    status
}
