//! Binary codec for encoding and decoding server packets.
//!
//! Wire format:
//! ```text
//! [version:1][packet_type:1][payload_len:2][payload:N]
//! ```
//! Total header size: 4 bytes. All multi-byte integers and floats are
//! big-endian.  Strings are a 2-byte length prefix followed by UTF-8 bytes.
//!
//! The client only ever *decodes* these packets in production; encoding
//! exists so tests, captures, and benchmarks can produce realistic frames.

use crate::protocol::messages::{
    ChatPublicPacket, PacketType, PlayerLeavePacket, PlayerMotionPacket, PlayerNewPacket,
    ScoreUpdatePacket, ServerPacket, HEADER_SIZE, PROTOCOL_VERSION,
};
use thiserror::Error;

/// Errors that can occur during packet encoding or decoding.
#[derive(Debug, Error, PartialEq)]
pub enum ProtocolError {
    /// The byte slice is shorter than the minimum required length.
    #[error("insufficient data: need at least {needed} bytes, got {available}")]
    InsufficientData { needed: usize, available: usize },

    /// The packet type byte in the header is not a recognized value.
    #[error("unknown packet type: 0x{0:02X}")]
    UnknownPacketType(u8),

    /// The protocol version in the header is not supported.
    #[error("unsupported protocol version: {0}")]
    UnsupportedVersion(u8),

    /// The payload could not be parsed (truncated field, UTF-8 error, etc.).
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// The header's payload length does not match the data available.
    #[error("payload length mismatch: header says {declared}, available is {available}")]
    PayloadLengthMismatch { declared: usize, available: usize },
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Encodes a [`ServerPacket`] into a byte vector including the 4-byte header.
///
/// # Errors
///
/// Returns [`ProtocolError::MalformedPayload`] if the payload does not fit
/// the 16-bit length field.
///
/// # Examples
///
/// ```rust
/// use ab_core::protocol::{decode_packet, encode_packet};
/// use ab_core::protocol::messages::{PlayerLeavePacket, ServerPacket};
///
/// let packet = ServerPacket::PlayerLeave(PlayerLeavePacket { id: 42 });
/// let bytes = encode_packet(&packet).unwrap();
/// let (decoded, consumed) = decode_packet(&bytes).unwrap();
/// assert_eq!(decoded, packet);
/// assert_eq!(consumed, bytes.len());
/// ```
pub fn encode_packet(packet: &ServerPacket) -> Result<Vec<u8>, ProtocolError> {
    let payload = encode_payload(packet)?;
    let payload_len = u16::try_from(payload.len()).map_err(|_| {
        ProtocolError::MalformedPayload(format!(
            "payload of {} bytes exceeds the 16-bit length field",
            payload.len()
        ))
    })?;

    let mut buf = Vec::with_capacity(HEADER_SIZE + payload.len());
    buf.push(PROTOCOL_VERSION);
    buf.push(packet.packet_type() as u8);
    buf.extend_from_slice(&payload_len.to_be_bytes());
    buf.extend_from_slice(&payload);
    Ok(buf)
}

/// Decodes one [`ServerPacket`] from the beginning of `bytes`.
///
/// Returns the decoded packet and the total number of bytes consumed
/// (header + payload), so the caller can advance their read cursor.
///
/// # Errors
///
/// Returns [`ProtocolError`] if the bytes are malformed.
pub fn decode_packet(bytes: &[u8]) -> Result<(ServerPacket, usize), ProtocolError> {
    if bytes.len() < HEADER_SIZE {
        return Err(ProtocolError::InsufficientData {
            needed: HEADER_SIZE,
            available: bytes.len(),
        });
    }

    let version = bytes[0];
    if version != PROTOCOL_VERSION {
        return Err(ProtocolError::UnsupportedVersion(version));
    }

    let type_byte = bytes[1];
    let packet_type =
        PacketType::try_from(type_byte).map_err(|_| ProtocolError::UnknownPacketType(type_byte))?;

    let payload_len = u16::from_be_bytes([bytes[2], bytes[3]]) as usize;
    let total_needed = HEADER_SIZE + payload_len;
    if bytes.len() < total_needed {
        return Err(ProtocolError::PayloadLengthMismatch {
            declared: payload_len,
            available: bytes.len() - HEADER_SIZE,
        });
    }

    let payload = &bytes[HEADER_SIZE..total_needed];
    let packet = decode_payload(packet_type, payload)?;
    Ok((packet, total_needed))
}

// ── Payload encoding ──────────────────────────────────────────────────────────

fn encode_payload(packet: &ServerPacket) -> Result<Vec<u8>, ProtocolError> {
    let mut buf = Vec::new();
    match packet {
        ServerPacket::PlayerNew(p) => encode_player_new(&mut buf, p)?,
        ServerPacket::PlayerLeave(p) => buf.extend_from_slice(&p.id.to_be_bytes()),
        ServerPacket::PlayerUpdate(p) | ServerPacket::PlayerBounce(p) => {
            encode_motion(&mut buf, p)
        }
        ServerPacket::ScoreUpdate(p) => encode_score_update(&mut buf, p),
        ServerPacket::ChatPublic(p) => {
            buf.extend_from_slice(&p.id.to_be_bytes());
            write_length_prefixed_string(&mut buf, &p.text)?;
        }
    }
    Ok(buf)
}

fn encode_player_new(buf: &mut Vec<u8>, p: &PlayerNewPacket) -> Result<(), ProtocolError> {
    buf.extend_from_slice(&p.id.to_be_bytes());
    write_length_prefixed_string(buf, &p.name)?;
    buf.extend_from_slice(&p.pos_x.to_be_bytes());
    buf.extend_from_slice(&p.pos_y.to_be_bytes());
    buf.extend_from_slice(&p.rot.to_be_bytes());
    Ok(())
}

fn encode_motion(buf: &mut Vec<u8>, p: &PlayerMotionPacket) {
    buf.extend_from_slice(&p.id.to_be_bytes());
    buf.extend_from_slice(&p.keystate.to_be_bytes());
    buf.extend_from_slice(&p.pos_x.to_be_bytes());
    buf.extend_from_slice(&p.pos_y.to_be_bytes());
    buf.extend_from_slice(&p.rot.to_be_bytes());
    buf.extend_from_slice(&p.speed_x.to_be_bytes());
    buf.extend_from_slice(&p.speed_y.to_be_bytes());
}

fn encode_score_update(buf: &mut Vec<u8>, p: &ScoreUpdatePacket) {
    buf.extend_from_slice(&p.id.to_be_bytes());
    buf.extend_from_slice(&p.score.to_be_bytes());
    buf.extend_from_slice(&p.earnings.to_be_bytes());
    buf.extend_from_slice(&p.totalkills.to_be_bytes());
    buf.extend_from_slice(&p.totaldeaths.to_be_bytes());
}

// ── Payload decoding ──────────────────────────────────────────────────────────

fn decode_payload(packet_type: PacketType, payload: &[u8]) -> Result<ServerPacket, ProtocolError> {
    match packet_type {
        PacketType::PlayerNew => decode_player_new(payload).map(ServerPacket::PlayerNew),
        PacketType::PlayerLeave => {
            require_len(payload, 2, "PlayerLeave")?;
            Ok(ServerPacket::PlayerLeave(PlayerLeavePacket {
                id: read_u16(payload, 0)?,
            }))
        }
        PacketType::PlayerUpdate => decode_motion(payload, "PlayerUpdate").map(ServerPacket::PlayerUpdate),
        PacketType::PlayerBounce => decode_motion(payload, "PlayerBounce").map(ServerPacket::PlayerBounce),
        PacketType::ScoreUpdate => decode_score_update(payload).map(ServerPacket::ScoreUpdate),
        PacketType::ChatPublic => {
            require_len(payload, 4, "ChatPublic")?;
            let id = read_u16(payload, 0)?;
            let (text, _) = read_length_prefixed_string(payload, 2)?;
            Ok(ServerPacket::ChatPublic(ChatPublicPacket { id, text }))
        }
    }
}

fn decode_player_new(p: &[u8]) -> Result<PlayerNewPacket, ProtocolError> {
    // 2 (id) + 2 (name_len) + name + 12 (pos_x, pos_y, rot) >= 16
    require_len(p, 16, "PlayerNew")?;
    let id = read_u16(p, 0)?;
    let (name, name_end) = read_length_prefixed_string(p, 2)?;
    require_len(p, name_end + 12, "PlayerNew.position")?;
    Ok(PlayerNewPacket {
        id,
        name,
        pos_x: read_f32(p, name_end)?,
        pos_y: read_f32(p, name_end + 4)?,
        rot: read_f32(p, name_end + 8)?,
    })
}

fn decode_motion(p: &[u8], context: &str) -> Result<PlayerMotionPacket, ProtocolError> {
    // 2 (id) + 2 (keystate) + 5 * 4 (pos_x, pos_y, rot, speed_x, speed_y) = 24
    require_len(p, 24, context)?;
    Ok(PlayerMotionPacket {
        id: read_u16(p, 0)?,
        keystate: read_u16(p, 2)?,
        pos_x: read_f32(p, 4)?,
        pos_y: read_f32(p, 8)?,
        rot: read_f32(p, 12)?,
        speed_x: read_f32(p, 16)?,
        speed_y: read_f32(p, 20)?,
    })
}

fn decode_score_update(p: &[u8]) -> Result<ScoreUpdatePacket, ProtocolError> {
    // 2 (id) + 4 (score) + 4 (earnings) + 2 (kills) + 2 (deaths) = 14
    require_len(p, 14, "ScoreUpdate")?;
    Ok(ScoreUpdatePacket {
        id: read_u16(p, 0)?,
        score: read_u32(p, 2)?,
        earnings: read_u32(p, 6)?,
        totalkills: read_u16(p, 10)?,
        totaldeaths: read_u16(p, 12)?,
    })
}

// ── Primitive readers / writers ───────────────────────────────────────────────

fn require_len(buf: &[u8], needed: usize, context: &str) -> Result<(), ProtocolError> {
    if buf.len() < needed {
        Err(ProtocolError::MalformedPayload(format!(
            "{context}: need {needed} bytes, got {}",
            buf.len()
        )))
    } else {
        Ok(())
    }
}

fn read_array<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], ProtocolError> {
    buf.get(offset..offset + N)
        .and_then(|slice| slice.try_into().ok())
        .ok_or(ProtocolError::InsufficientData {
            needed: offset + N,
            available: buf.len(),
        })
}

fn read_u16(buf: &[u8], offset: usize) -> Result<u16, ProtocolError> {
    read_array::<2>(buf, offset).map(u16::from_be_bytes)
}

fn read_u32(buf: &[u8], offset: usize) -> Result<u32, ProtocolError> {
    read_array::<4>(buf, offset).map(u32::from_be_bytes)
}

fn read_f32(buf: &[u8], offset: usize) -> Result<f32, ProtocolError> {
    read_array::<4>(buf, offset).map(f32::from_be_bytes)
}

/// Writes a 2-byte length prefix followed by the UTF-8 string bytes.
///
/// Strings longer than `u16::MAX` bytes are rejected with
/// [`ProtocolError::MalformedPayload`].
fn write_length_prefixed_string(buf: &mut Vec<u8>, s: &str) -> Result<(), ProtocolError> {
    let len = u16::try_from(s.len()).map_err(|_| {
        ProtocolError::MalformedPayload(format!(
            "string of {} bytes exceeds the 16-bit length prefix",
            s.len()
        ))
    })?;
    buf.extend_from_slice(&len.to_be_bytes());
    buf.extend_from_slice(s.as_bytes());
    Ok(())
}

/// Reads a 2-byte length prefix and then that many UTF-8 bytes.
/// Returns the string and the offset of the byte after the string.
fn read_length_prefixed_string(buf: &[u8], offset: usize) -> Result<(String, usize), ProtocolError> {
    if buf.len() < offset + 2 {
        return Err(ProtocolError::MalformedPayload(format!(
            "need 2 bytes for string length at offset {offset}"
        )));
    }
    let len = u16::from_be_bytes([buf[offset], buf[offset + 1]]) as usize;
    let start = offset + 2;
    if buf.len() < start + len {
        return Err(ProtocolError::MalformedPayload(format!(
            "string of length {len} at offset {start} exceeds buffer"
        )));
    }
    let s = std::str::from_utf8(&buf[start..start + len])
        .map_err(|e| ProtocolError::MalformedPayload(format!("invalid UTF-8: {e}")))?
        .to_string();
    Ok((s, start + len))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
