use std::{
    net::SocketAddr,
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

use tokio::{
    io::{AsyncRead, AsyncWrite},
    net::{TcpListener, TcpStream},
};
use tracing::{error, info, warn};

use crate::{
    evaluate_with,
    interpreter::evaluator::options::EvalOptions,
    server::{
        DEFAULT_PORT, STOP,
        session::Session,
        wire::{WireResult, read_frame, write_frame},
    },
    util::num::format_number,
};

/// Settings for a [`CalcServer`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host name or address to bind.
    pub host:    String,
    /// Port to bind; `0` picks a free one.
    pub port:    u16,
    /// Directory for per-client session logs, if any.
    pub log_dir: Option<PathBuf>,
    /// Options every request is evaluated with.
    pub options: EvalOptions,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host:    "127.0.0.1".to_string(),
               port:    DEFAULT_PORT,
               log_dir: None,
               options: EvalOptions::default(), }
    }
}

/// Pause after a failed accept before trying again.
pub const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// A calculator server bound to a TCP port.
///
/// Every accepted connection is served by its own task. Requests are
/// evaluated independently, so one client's bad input never affects another
/// client or the server itself.
pub struct CalcServer {
    listener: TcpListener,
    config:   Arc<ServerConfig>,
}

impl CalcServer {
    /// Binds the listening socket.
    ///
    /// # Errors
    /// Returns an error if the address cannot be bound.
    pub async fn bind(config: ServerConfig) -> WireResult<Self> {
        let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
        Ok(Self { listener,
                  config: Arc::new(config) })
    }

    /// The address actually bound, useful when the configured port was `0`.
    ///
    /// # Errors
    /// Returns an error if the socket cannot report its address.
    pub fn local_addr(&self) -> WireResult<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts clients forever, numbering them from 1.
    ///
    /// A failed accept, such as running out of file descriptors, is logged and
    /// retried after [`ACCEPT_BACKOFF`].
    ///
    /// # Errors
    /// Returns an error only if the bound address cannot be read at startup.
    pub async fn run(self) -> WireResult<()> {
        info!(addr = %self.local_addr()?, "server started, waiting for clients");

        let mut next_id = 0;
        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!(error = %e, "failed to accept connection");
                    tokio::time::sleep(ACCEPT_BACKOFF).await;
                    continue;
                },
            };
            next_id += 1;
            tokio::spawn(handle_connection(stream, peer, next_id, Arc::clone(&self.config)));
        }
    }
}

#[tracing::instrument(level = "info", skip_all, fields(client = id, %peer))]
async fn handle_connection(mut stream: TcpStream,
                           peer: SocketAddr,
                           id: usize,
                           config: Arc<ServerConfig>) {
    info!("client connected");
    let mut session = Session::new(id, peer);

    if let Err(e) = serve_requests(&mut stream, &mut session, &config.options).await {
        error!(error = %e, "connection failed");
    }

    if let Some(dir) = &config.log_dir {
        match session.append_to(dir).await {
            Ok(path) => info!(path = %path.display(), "session logged"),
            Err(e) => warn!(error = %e, "could not write session log"),
        }
    }

    info!(requests = session.requests().len(), "client disconnected");
}

/// Answers requests on `stream` until the client sends the stop string or
/// hangs up.
///
/// # Errors
/// Returns a [`WireError`](crate::error::WireError) if a frame cannot be read
/// or written. Evaluation errors are sent back to the client, not returned.
pub async fn serve_requests<S>(stream: &mut S,
                               session: &mut Session,
                               options: &EvalOptions)
                               -> WireResult<()>
    where S: AsyncRead + AsyncWrite + Unpin
{
    while let Some(expression) = read_frame(stream).await? {
        if expression == STOP {
            break;
        }
        info!(client = session.id(), expression = %expression, "client request");

        let response = respond(&expression, options);
        write_frame(stream, &response).await?;
        session.record(expression, response);
    }
    Ok(())
}

/// Evaluates `expression` and renders the outcome as response text.
///
/// Results are formatted with
/// [`format_number`](crate::util::num::format_number); errors become
/// `error: <message>`. The text is clipped to fit a single frame.
///
/// # Example
/// ```
/// use infix::{EvalOptions, server::listener::respond};
///
/// assert_eq!(respond("3+4*2", &EvalOptions::default()), "11.0");
/// assert_eq!(respond("10/0", &EvalOptions::default()), "error: Division by zero.");
/// ```
#[must_use]
pub fn respond(expression: &str, options: &EvalOptions) -> String {
    match evaluate_with(expression, options) {
        Ok(value) => format_number(value),
        Err(e) => {
            if e.is_internal() {
                error!(expression, error = %e, "evaluator invariant violated");
            } else {
                warn!(expression, error = %e, "rejected expression");
            }
            clip_to_frame(format!("error: {e}"))
        },
    }
}

/// Truncates `text` at a char boundary so it fits in one frame.
fn clip_to_frame(mut text: String) -> String {
    let limit = usize::from(u16::MAX);
    if text.len() > limit {
        let mut cut = limit;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
    }
    text
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncWriteExt, duplex};

    use super::*;

    #[tokio::test]
    async fn answers_until_stop() {
        let (mut client, mut server) = duplex(1024);
        let peer = SocketAddr::from(([127, 0, 0, 1], 1));

        let handle = tokio::spawn(async move {
            let mut session = Session::new(1, peer);
            let options = EvalOptions::default();
            serve_requests(&mut server, &mut session, &options).await.unwrap();
            session
        });

        write_frame(&mut client, "(3+4)*2").await.unwrap();
        assert_eq!(read_frame(&mut client).await.unwrap().as_deref(), Some("14.0"));
        write_frame(&mut client, "42").await.unwrap();
        let reply = read_frame(&mut client).await.unwrap().unwrap();
        assert!(reply.starts_with("error: Malformed expression"), "{reply}");
        write_frame(&mut client, STOP).await.unwrap();

        let session = handle.await.unwrap();
        assert_eq!(session.requests().len(), 2);
        assert_eq!(session.requests()[0].response, "14.0");
    }

    #[tokio::test]
    async fn long_rejected_request_is_answered_and_recorded() {
        let (mut client, mut server) = duplex(usize::from(u16::MAX) + 2);
        let peer = SocketAddr::from(([127, 0, 0, 1], 1));

        let handle = tokio::spawn(async move {
            let mut session = Session::new(1, peer);
            let options = EvalOptions::default();
            serve_requests(&mut server, &mut session, &options).await.unwrap();
            session
        });

        let request = format!("1+{}", "1.".repeat(32_760));
        write_frame(&mut client, &request).await.unwrap();
        let reply = read_frame(&mut client).await.unwrap().unwrap();
        assert!(reply.starts_with("error: Malformed expression"), "{reply}");
        write_frame(&mut client, STOP).await.unwrap();

        let session = handle.await.unwrap();
        assert_eq!(session.requests().len(), 1);
        assert_eq!(session.requests()[0].expression, request);
    }

    #[test]
    fn responses_fit_in_one_frame() {
        let clipped = clip_to_frame("é".repeat(40_000));
        assert_eq!(clipped.len(), usize::from(u16::MAX) - 1);
        assert!(clipped.chars().all(|c| c == 'é'));

        assert_eq!(clip_to_frame("error: short".to_string()), "error: short");
    }

    #[tokio::test]
    async fn hang_up_ends_the_session_cleanly() {
        let (mut client, mut server) = duplex(64);
        let peer = SocketAddr::from(([127, 0, 0, 1], 1));

        write_frame(&mut client, "1+1").await.unwrap();
        client.shutdown().await.unwrap();

        let mut session = Session::new(1, peer);
        let options = EvalOptions::default();
        serve_requests(&mut server, &mut session, &options).await.unwrap();
        assert_eq!(session.requests().len(), 1);
    }
}
