use std::{
    fmt::Write as _,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use chrono::{DateTime, SecondsFormat, Utc};
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

/// One answered request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestRecord {
    /// The expression as the client sent it.
    pub expression: String,
    /// The text sent back.
    pub response:   String,
    /// When the response was produced.
    pub at:         DateTime<Utc>,
}

/// Bookkeeping for one connected client.
///
/// A session lives exactly as long as its connection and is only touched by
/// the task serving that connection.
#[derive(Debug, Clone)]
pub struct Session {
    id:           usize,
    peer:         SocketAddr,
    connected_at: DateTime<Utc>,
    requests:     Vec<RequestRecord>,
}

impl Session {
    /// Starts a session for client number `id`.
    #[must_use]
    pub fn new(id: usize, peer: SocketAddr) -> Self {
        Self { id,
               peer,
               connected_at: Utc::now(),
               requests: Vec::new() }
    }

    /// The client number, counting from 1 in connection order.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Requests answered so far, oldest first.
    #[must_use]
    pub fn requests(&self) -> &[RequestRecord] {
        &self.requests
    }

    /// Records an answered request.
    pub fn record(&mut self, expression: impl Into<String>, response: impl Into<String>) {
        self.requests.push(RequestRecord { expression: expression.into(),
                                           response:   response.into(),
                                           at:         Utc::now(), });
    }

    /// Renders the session as log text: one header line, then one
    /// `expression => response` line per request.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("client {} ({}) connected at {}, {} request(s)\n",
                              self.id,
                              self.peer,
                              self.connected_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                              self.requests.len());
        for record in &self.requests {
            let _ = writeln!(out,
                             "[{}] {} => {}",
                             record.at.to_rfc3339_opts(SecondsFormat::Millis, true),
                             record.expression,
                             record.response);
        }
        out
    }

    /// Path of this session's log file inside `dir`.
    #[must_use]
    pub fn log_path(&self, dir: &Path) -> PathBuf {
        dir.join(format!("client-{}.log", self.id))
    }

    /// Appends the rendered session to its log file in `dir`, creating the
    /// directory and file when missing.
    ///
    /// # Errors
    /// Returns any I/O error raised while creating or writing the file.
    pub async fn append_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(dir).await?;
        let path = self.log_path(dir);
        let mut file = OpenOptions::new().create(true).append(true).open(&path).await?;
        file.write_all(self.render().as_bytes()).await?;
        file.flush().await?;
        Ok(path)
    }
}
