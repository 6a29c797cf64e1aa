use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::error::WireError;

/// Result type used by the transport.
pub type WireResult<T> = Result<T, WireError>;

/// Writes `payload` as one frame: a big-endian `u16` byte length followed by
/// the UTF-8 bytes.
///
/// # Errors
/// [`WireError::FrameTooLong`] if the payload exceeds 65535 bytes, or
/// [`WireError::Io`] if the writer fails.
pub async fn write_frame<W>(writer: &mut W, payload: &str) -> WireResult<()>
    where W: AsyncWrite + Unpin
{
    let len = u16::try_from(payload.len()).map_err(|_| WireError::FrameTooLong { len: payload.len() })?;
    writer.write_u16(len).await?;
    writer.write_all(payload.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

/// Reads one frame written by [`write_frame`].
///
/// Returns `Ok(None)` when the peer closed the stream before sending a length
/// prefix.
///
/// # Errors
/// [`WireError::ConnectionClosed`] if the stream ends inside a payload,
/// [`WireError::InvalidUtf8`] if the payload cannot be decoded, or
/// [`WireError::Io`] for any other failure.
pub async fn read_frame<R>(reader: &mut R) -> WireResult<Option<String>>
    where R: AsyncRead + Unpin
{
    let len = match reader.read_u16().await {
        Ok(len) => usize::from(len),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut payload = vec![0; len];
    if let Err(e) = reader.read_exact(&mut payload).await {
        return Err(if e.kind() == io::ErrorKind::UnexpectedEof {
                       WireError::ConnectionClosed
                   } else {
                       e.into()
                   });
    }

    String::from_utf8(payload).map(Some)
                              .map_err(|_| WireError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn frame_layout_is_length_then_bytes() {
        let mut buf = Vec::new();
        write_frame(&mut buf, "3+4").await.unwrap();
        assert_eq!(buf, [0, 3, b'3', b'+', b'4']);
    }

    #[tokio::test]
    async fn frames_read_back_in_order() {
        let mut buf = Vec::new();
        write_frame(&mut buf, "1+1").await.unwrap();
        write_frame(&mut buf, "").await.unwrap();
        write_frame(&mut buf, "π").await.unwrap();

        let mut reader = buf.as_slice();
        assert_eq!(read_frame(&mut reader).await.unwrap().as_deref(), Some("1+1"));
        assert_eq!(read_frame(&mut reader).await.unwrap().as_deref(), Some(""));
        assert_eq!(read_frame(&mut reader).await.unwrap().as_deref(), Some("π"));
        assert_eq!(read_frame(&mut reader).await.unwrap(), None);
    }

    #[tokio::test]
    async fn truncated_payload_is_a_closed_connection() {
        let mut reader: &[u8] = &[0, 5, b'1', b'+'];
        assert!(matches!(read_frame(&mut reader).await, Err(WireError::ConnectionClosed)));
    }

    #[tokio::test]
    async fn invalid_utf8_is_rejected() {
        let mut reader: &[u8] = &[0, 2, 0xC3, 0x28];
        assert!(matches!(read_frame(&mut reader).await, Err(WireError::InvalidUtf8)));
    }

    #[tokio::test]
    async fn oversized_payload_is_rejected() {
        let payload = "1".repeat(usize::from(u16::MAX) + 1);
        let mut buf = Vec::new();
        assert!(matches!(write_frame(&mut buf, &payload).await,
                         Err(WireError::FrameTooLong { len }) if len == payload.len()));
        assert!(buf.is_empty());
    }
}
