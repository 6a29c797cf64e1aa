use tokio::{
    io::AsyncWriteExt,
    net::{TcpStream, ToSocketAddrs},
};
use tracing::debug;

use crate::{
    error::WireError,
    server::{
        STOP,
        wire::{WireResult, read_frame, write_frame},
    },
};

/// A connection to a calculator server.
///
/// # Example
///
/// ```ignore
/// use infix::server::client::CalcClient;
///
/// let mut client = CalcClient::connect("127.0.0.1:5000").await?;
/// assert_eq!(client.ask("3(4+5)").await?, "27.0");
/// client.close().await?;
/// ```
pub struct CalcClient {
    stream: TcpStream,
}

impl CalcClient {
    /// Connects to a server.
    ///
    /// # Errors
    /// Returns an error if the connection cannot be established.
    pub async fn connect(addr: impl ToSocketAddrs) -> WireResult<Self> {
        let stream = TcpStream::connect(addr).await?;
        debug!(peer = %stream.peer_addr()?, "connected to server");
        Ok(Self { stream })
    }

    /// Sends one expression and waits for the server's answer.
    ///
    /// The answer is either a formatted number or an `error: ...` message.
    ///
    /// # Errors
    /// Returns an error if the request cannot be sent, or if the server hangs
    /// up before answering.
    pub async fn ask(&mut self, expression: &str) -> WireResult<String> {
        write_frame(&mut self.stream, expression).await?;
        read_frame(&mut self.stream).await?
                                    .ok_or(WireError::ConnectionClosed)
    }

    /// Ends the session by sending the stop string, then closes the socket.
    ///
    /// # Errors
    /// Returns an error if the stop string cannot be sent.
    pub async fn close(mut self) -> WireResult<()> {
        write_frame(&mut self.stream, STOP).await?;
        self.stream.shutdown().await?;
        Ok(())
    }
}
