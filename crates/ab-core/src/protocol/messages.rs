//! All server-to-client packet types understood by the client core.
//!
//! Each packet is a plain data struct mirroring the wire payload field for
//! field.  The codec in [`super::codec`] turns bytes into these structs; the
//! client crate turns these structs into event messages.

use serde::{Deserialize, Serialize};

use crate::domain::player::PlayerId;

// ── Protocol constants ────────────────────────────────────────────────────────

/// Current protocol version byte.
pub const PROTOCOL_VERSION: u8 = 0x01;

/// Total size of the frame header in bytes.
pub const HEADER_SIZE: usize = 4;

// ── Packet type codes ─────────────────────────────────────────────────────────

/// All packet type codes the client decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PacketType {
    // Player lifecycle (0x10–0x1F)
    PlayerNew = 0x10,
    PlayerLeave = 0x11,
    PlayerUpdate = 0x12,
    PlayerBounce = 0x13,
    // Stats (0x20–0x2F)
    ScoreUpdate = 0x20,
    // Chat (0x30–0x3F)
    ChatPublic = 0x30,
}

impl TryFrom<u8> for PacketType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        match value {
            0x10 => Ok(PacketType::PlayerNew),
            0x11 => Ok(PacketType::PlayerLeave),
            0x12 => Ok(PacketType::PlayerUpdate),
            0x13 => Ok(PacketType::PlayerBounce),
            0x20 => Ok(PacketType::ScoreUpdate),
            0x30 => Ok(PacketType::ChatPublic),
            _ => Err(()),
        }
    }
}

// ── Per-packet payload structs ────────────────────────────────────────────────

/// PLAYER_NEW (0x10): a player entered the arena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerNewPacket {
    pub id: PlayerId,
    /// Display name chosen at login.
    pub name: String,
    pub pos_x: f32,
    pub pos_y: f32,
    /// Heading in radians.
    pub rot: f32,
}

/// PLAYER_LEAVE (0x11): a player left the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerLeavePacket {
    pub id: PlayerId,
}

/// Shared payload of PLAYER_UPDATE (0x12) and PLAYER_BOUNCE (0x13).
///
/// Both packets carry a full motion snapshot: the packed keystate plus
/// position, rotation, and velocity.  They differ only in what triggered
/// them on the server (a key change versus a wall collision).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerMotionPacket {
    pub id: PlayerId,
    /// Packed key bitfield; see [`super::keystate`].
    pub keystate: u16,
    pub pos_x: f32,
    pub pos_y: f32,
    pub rot: f32,
    pub speed_x: f32,
    pub speed_y: f32,
}

/// SCORE_UPDATE (0x20): authoritative stats for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreUpdatePacket {
    pub id: PlayerId,
    pub score: u32,
    /// Upgrade currency earned this session.  Carried on the wire but not
    /// tracked in player state.
    pub earnings: u32,
    pub totalkills: u16,
    pub totaldeaths: u16,
}

/// CHAT_PUBLIC (0x30): a chat line broadcast to the whole arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPublicPacket {
    pub id: PlayerId,
    pub text: String,
}

// ── Top-level packet enum ─────────────────────────────────────────────────────

/// A fully decoded server packet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ServerPacket {
    PlayerNew(PlayerNewPacket),
    PlayerLeave(PlayerLeavePacket),
    PlayerUpdate(PlayerMotionPacket),
    PlayerBounce(PlayerMotionPacket),
    ScoreUpdate(ScoreUpdatePacket),
    ChatPublic(ChatPublicPacket),
}

impl ServerPacket {
    /// Returns the [`PacketType`] discriminant for this packet.
    pub fn packet_type(&self) -> PacketType {
        match self {
            ServerPacket::PlayerNew(_) => PacketType::PlayerNew,
            ServerPacket::PlayerLeave(_) => PacketType::PlayerLeave,
            ServerPacket::PlayerUpdate(_) => PacketType::PlayerUpdate,
            ServerPacket::PlayerBounce(_) => PacketType::PlayerBounce,
            ServerPacket::ScoreUpdate(_) => PacketType::ScoreUpdate,
            ServerPacket::ChatPublic(_) => PacketType::ChatPublic,
        }
    }

    /// Returns the id of the player this packet refers to.
    pub fn player_id(&self) -> PlayerId {
        match self {
            ServerPacket::PlayerNew(p) => p.id,
            ServerPacket::PlayerLeave(p) => p.id,
            ServerPacket::PlayerUpdate(p) | ServerPacket::PlayerBounce(p) => p.id,
            ServerPacket::ScoreUpdate(p) => p.id,
            ServerPacket::ChatPublic(p) => p.id,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
