// Release check against the GitHub API.
//
// Fetches `releases/latest` for the configured repository, compares the tag
// against the running version, and logs the outcome. All failure modes are
// logged rather than returned; an unreachable API must never get in the way
// of startup.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Where the running version stands relative to the published release.
#[derive(Debug, PartialEq)]
pub enum UpdateStatus {
    UpToDate,
    Outdated { latest: String },
    Unknown,
}

/// Compare the running version against the latest release tag.
///
/// Release tags carry a `v` prefix, so the running version is formatted the
/// same way before the comparison. Any mismatch counts as outdated; we can't
/// tell an old build from an experimental one by the tag alone.
pub fn evaluate_release(current_version: &str, latest_tag: Option<&str>) -> UpdateStatus {
    let Some(latest) = latest_tag else {
        return UpdateStatus::Unknown;
    };

    let current = format!("v{}", current_version);
    if current.eq_ignore_ascii_case(latest) {
        UpdateStatus::UpToDate
    } else {
        UpdateStatus::Outdated {
            latest: latest.to_string(),
        }
    }
}

/// Turn the API URL into the matching browser URL for the log message.
fn download_url(api_url: &str) -> String {
    api_url.replace("api.github.com/repos", "github.com")
}

/// Check for a newer release and log what we find.
///
/// `api_url` should look like
/// `https://api.github.com/repos/USER/REPO/releases/latest`.
pub async fn check_for_updates(name: &str, version: &str, api_url: &str) {
    if let Err(e) = run_check(name, version, api_url).await {
        tracing::error!(
            "[{}] Exception occurred while checking for a new version: {}",
            name,
            e
        );
    }
}

async fn run_check(name: &str, version: &str, api_url: &str) -> Result<(), reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "Accept",
        HeaderValue::from_static("application/vnd.github+json"),
    );
    // GitHub rejects requests without a User-Agent.
    headers.insert("User-Agent", HeaderValue::from_static("ChatGuard"));

    let client = Client::builder().default_headers(headers).build()?;
    let resp = client.get(api_url).send().await?;

    let status = resp.status();
    if status != StatusCode::OK {
        if status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!(
                "[{}] Rate limited, can't check for a new plugin version. This should resolve itself within an hour.",
                name
            );
        } else {
            tracing::warn!(
                "[{}] Unexpected response code: {}. Unable to check for a new plugin version.",
                name,
                status.as_u16()
            );
        }
        return Ok(());
    }

    let release: ApiRelease = resp.json().await?;
    match evaluate_release(version, release.tag_name.as_deref()) {
        UpdateStatus::UpToDate => {
            tracing::info!("[{}] You are running the latest version.", name);
        }
        UpdateStatus::Outdated { latest } => {
            tracing::info!(
                "[{}] New stable {} available, you are either running an outdated or experimental v{}.",
                name,
                latest,
                version
            );
            tracing::info!(
                "[{}] Download the latest stable version from: {}",
                name,
                download_url(api_url)
            );
        }
        UpdateStatus::Unknown => {
            tracing::warn!("[{}] Could not determine the latest version.", name);
        }
    }

    Ok(())
}

#[derive(Debug, Deserialize)]
struct ApiRelease {
    tag_name: Option<String>,
}
