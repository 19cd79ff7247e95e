//! curl-impersonate transport
//!
//! Runs the `curl-impersonate-chrome` binary once per fetch. The binary is
//! linked against libcurl-impersonate, which reads the `CURL_IMPERSONATE`
//! environment variable and shapes the TLS ClientHello and HTTP/2 settings
//! after the named browser. `CURL_IMPERSONATE_HEADERS=no` leaves header
//! selection to the profile so nothing is sent twice.
//!
//! The response status and Content-Type come back on stderr through
//! `--write-out`, which keeps stdout a plain body stream that can be capped.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::debug;
use url::Url;

use super::fetcher::{FetchError, FetchedPage};
use super::profile::BrowserProfile;
use super::transport::{
    append_capped, charset_of, decode_body, BrowserTransport, DEFAULT_ENCODING, MAX_BODY_BYTES,
    MAX_REDIRECTS,
};

/// Binary name shipped by the curl-impersonate Chrome build
pub const DEFAULT_CURL_BINARY: &str = "curl-impersonate-chrome";

const WRITE_OUT_MARKER: &str = "@@fetch-result@@";

/// curl exit code for an expired `--max-time`
const CURL_TIMEOUT_EXIT: i32 = 28;

/// Transport that impersonates the profile's browser down to the handshake
pub struct CurlImpersonateTransport {
    binary: PathBuf,
}

impl CurlImpersonateTransport {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Check that the binary can be started
    pub async fn probe(&self) -> Result<(), FetchError> {
        let output = Command::new(&self.binary)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                FetchError::Transport(format!("cannot run {}: {}", self.binary.display(), e))
            })?;

        if !output.status.success() {
            return Err(FetchError::Transport(format!(
                "{} --version exited with {}",
                self.binary.display(),
                output.status
            )));
        }

        Ok(())
    }

    fn command(&self, url: &Url, profile: &BrowserProfile, timeout: Duration) -> Command {
        let mut command = Command::new(&self.binary);
        command
            .env("CURL_IMPERSONATE", profile.name)
            .env("CURL_IMPERSONATE_HEADERS", "no")
            .args(request_args(url, profile, timeout))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }
}

#[async_trait]
impl BrowserTransport for CurlImpersonateTransport {
    async fn fetch(
        &self,
        url: &Url,
        profile: &BrowserProfile,
        timeout: Duration,
    ) -> Result<FetchedPage, FetchError> {
        debug!("GET {} as {} via {}", url, profile.name, self.binary.display());

        let mut child = self.command(url, profile, timeout).spawn().map_err(|e| {
            FetchError::Transport(format!("cannot run {}: {}", self.binary.display(), e))
        })?;

        let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
            return Err(FetchError::Transport("curl output pipes unavailable".to_string()));
        };

        let (body, diagnostics) = tokio::try_join!(
            read_capped(stdout, MAX_BODY_BYTES),
            read_capped(stderr, MAX_BODY_BYTES)
        )
        .map_err(|e| FetchError::Transport(e.to_string()))?;
        let exit = child
            .wait()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let diagnostics = String::from_utf8_lossy(&diagnostics);
        let (status, content_type) = interpret_exit(exit, &diagnostics, timeout)?;

        let encoding = content_type
            .as_deref()
            .and_then(charset_of)
            .unwrap_or_else(|| DEFAULT_ENCODING.to_string());

        Ok(FetchedPage {
            status,
            body: decode_body(&body, &encoding),
            encoding,
        })
    }
}

/// Command-line arguments for one GET, headers in profile order
fn request_args(url: &Url, profile: &BrowserProfile, timeout: Duration) -> Vec<String> {
    let mut args = vec![
        "--silent".to_string(),
        "--show-error".to_string(),
        "--location".to_string(),
        "--max-redirs".to_string(),
        MAX_REDIRECTS.to_string(),
        "--compressed".to_string(),
        "--max-time".to_string(),
        timeout.as_secs().max(1).to_string(),
        "--user-agent".to_string(),
        profile.user_agent.to_string(),
    ];

    for (name, value) in profile.headers {
        args.push("--header".to_string());
        args.push(format!("{}: {}", name, value));
    }

    args.push("--write-out".to_string());
    args.push(format!(
        "%{{stderr}}\n{} %{{http_code}} %{{content_type}}\n",
        WRITE_OUT_MARKER
    ));
    args.push(url.to_string());
    args
}

/// Drain `reader` to the end, keeping at most `cap` bytes
async fn read_capped<R: AsyncRead + Unpin>(mut reader: R, cap: usize) -> std::io::Result<Vec<u8>> {
    let mut kept = Vec::new();
    let mut chunk = [0u8; 8192];
    loop {
        let read = reader.read(&mut chunk).await?;
        if read == 0 {
            return Ok(kept);
        }
        // Past the cap the rest is read and dropped so curl can finish
        append_capped(&mut kept, &chunk[..read], cap);
    }
}

/// Status code and Content-Type reported through `--write-out`
fn parse_write_out(diagnostics: &str) -> Option<(u16, Option<String>)> {
    let line = diagnostics
        .lines()
        .rev()
        .find_map(|line| line.strip_prefix(WRITE_OUT_MARKER))?;

    let mut parts = line.trim().splitn(2, ' ');
    let status: u16 = parts.next()?.parse().ok()?;
    if status == 0 {
        return None;
    }
    let content_type = parts
        .next()
        .map(str::trim)
        .filter(|ct| !ct.is_empty())
        .map(str::to_string);

    Some((status, content_type))
}

fn interpret_exit(
    exit: ExitStatus,
    diagnostics: &str,
    timeout: Duration,
) -> Result<(u16, Option<String>), FetchError> {
    if exit.code() == Some(CURL_TIMEOUT_EXIT) {
        return Err(FetchError::Timeout(timeout.as_secs()));
    }

    if exit.success() {
        if let Some(reported) = parse_write_out(diagnostics) {
            return Ok(reported);
        }
    }

    let message = diagnostics
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with(WRITE_OUT_MARKER))
        .map(str::to_string)
        .unwrap_or_else(|| format!("curl exited with {}", exit));

    Err(FetchError::Transport(message))
}
