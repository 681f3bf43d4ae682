//! Capture replay: feeds recorded wire frames into the engine.
//!
//! A capture file is nothing more than frames written back to back, exactly
//! as they arrived on the socket.  [`open_capture_feed`] reads one up front,
//! so a missing or unreadable file is an error for the caller.  The bytes are
//! then decoded on a background tokio task ([`spawn_capture_feed`]) and the
//! packets sent over an `mpsc` channel to the dispatch loop, which stays the
//! only owner of the state.
//!
//! Decoding stops at the first frame that fails to decode.  Frames after a
//! corrupt one cannot be located reliably, so the rest of the file is
//! skipped and the byte offset is logged.

use std::path::{Path, PathBuf};

use ab_core::{decode_packet, ProtocolError, ServerPacket};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Channel capacity between the capture task and the dispatch loop.
pub const FEED_CHANNEL_CAPACITY: usize = 256;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("I/O error reading capture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of splitting a capture buffer into packets.
#[derive(Debug, Default, PartialEq)]
pub struct DecodedFrames {
    /// Packets decoded before the first error, in file order.
    pub packets: Vec<ServerPacket>,
    /// Byte offset and cause of the frame that stopped decoding, if any.
    pub error: Option<(usize, ProtocolError)>,
}

/// Decodes consecutive frames from `bytes`.
pub fn decode_frames(bytes: &[u8]) -> DecodedFrames {
    let mut decoded = DecodedFrames::default();
    let mut offset = 0;

    while offset < bytes.len() {
        match decode_packet(&bytes[offset..]) {
            Ok((packet, consumed)) => {
                decoded.packets.push(packet);
                offset += consumed;
            }
            Err(e) => {
                decoded.error = Some((offset, e));
                break;
            }
        }
    }

    decoded
}

/// Reads a capture file into memory.
///
/// # Errors
///
/// Returns [`CaptureError::Io`] if the file cannot be read.
pub async fn read_capture(path: &Path) -> Result<Vec<u8>, CaptureError> {
    tokio::fs::read(path).await.map_err(|source| CaptureError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the capture at `path` and starts feeding its packets.
///
/// # Errors
///
/// Returns [`CaptureError::Io`] if the file cannot be read.  Nothing is
/// spawned in that case.
pub async fn open_capture_feed(path: &Path) -> Result<mpsc::Receiver<ServerPacket>, CaptureError> {
    let bytes = read_capture(path).await?;
    info!(path = %path.display(), bytes = bytes.len(), "capture loaded");
    Ok(spawn_capture_feed(bytes))
}

/// Starts a task that decodes `bytes` and returns the receiving end of its
/// packet channel.  The channel closes when the capture is exhausted or the
/// receiver is dropped.
pub fn spawn_capture_feed(bytes: Vec<u8>) -> mpsc::Receiver<ServerPacket> {
    let (tx, rx) = mpsc::channel(FEED_CHANNEL_CAPACITY);

    tokio::spawn(async move {
        let DecodedFrames { packets, error } = decode_frames(&bytes);
        if let Some((offset, e)) = error {
            warn!(offset, error = %e, "capture decode stopped; remaining bytes skipped");
        }
        debug!(packets = packets.len(), "capture decoded");

        for packet in packets {
            if tx.send(packet).await.is_err() {
                debug!("capture receiver dropped; stopping feed");
                return;
            }
        }
    });

    rx
}

// ── Tests ─────────────────────────────────────────────────────────────────────
