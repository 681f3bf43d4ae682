//! Maps decoded server packets onto inbound events.
//!
//! The match below is exhaustive over [`ServerPacket`]: adding a packet type
//! to `ab-core` fails to compile here until it is given an event kind.

use ab_core::ServerPacket;

use crate::application::events::{EventArgs, EventKind};

/// Returns the inbound `(kind, payload)` pair for `packet`.
pub fn event_for(packet: ServerPacket) -> (EventKind, EventArgs) {
    match packet {
        ServerPacket::PlayerNew(p) => (EventKind::PlayerNew, EventArgs::PlayerNew(p)),
        ServerPacket::PlayerLeave(p) => (EventKind::PlayerLeave, EventArgs::PlayerLeave(p)),
        ServerPacket::PlayerUpdate(m) => (EventKind::PlayerUpdate, EventArgs::Motion(m)),
        ServerPacket::PlayerBounce(m) => (EventKind::PlayerBounce, EventArgs::Motion(m)),
        ServerPacket::ScoreUpdate(p) => (EventKind::ScoreUpdate, EventArgs::ScoreUpdate(p)),
        ServerPacket::ChatPublic(p) => (EventKind::ChatPublic, EventArgs::ChatPublic(p)),
    }
}
