//! Keystate decoder: unpacks the movement bitfield carried by motion packets.
//!
//! # What is a keystate? (for beginners)
//!
//! Rather than sending one message per key press, the server folds the
//! pressed state of every movement key into a single integer, one bit per
//! key.  Bit 4 set means "boost is held", bit 6 set means "stealth is on",
//! and so on.  This module turns that integer back into named flags.
//!
//! ```text
//! bit:   7          6        5       4      3      2     1     0
//!       FLAGSPEED  STEALTH  STRAFE  BOOST  RIGHT  LEFT  DOWN  UP
//! ```
//!
//! # "No applicable movement"
//!
//! A packed value with any bit set *above* bit 7 is not a keystate this
//! client understands.  [`decode_movement`] returns `None` for such values,
//! and callers must treat `None` as "leave the existing flags untouched",
//! never as "reset to defaults".

use serde::{Deserialize, Serialize};

/// Individual key bits within a packed keystate.
pub mod keys {
    pub const UP: u32 = 1 << 0;
    pub const DOWN: u32 = 1 << 1;
    pub const LEFT: u32 = 1 << 2;
    pub const RIGHT: u32 = 1 << 3;
    pub const BOOST: u32 = 1 << 4;
    pub const STRAFE: u32 = 1 << 5;
    pub const STEALTH: u32 = 1 << 6;
    pub const FLAGSPEED: u32 = 1 << 7;
}

/// Every bit a valid keystate may carry.
pub const KEYSTATE_MASK: u32 = 0xFF;

/// Sideways-movement mode derived from the STRAFE and LEFT/RIGHT bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strafe {
    /// STRAFE is not held; LEFT/RIGHT rotate the aircraft.
    #[default]
    None,
    /// STRAFE held with LEFT.
    Left,
    /// STRAFE held with RIGHT.
    Right,
    /// STRAFE held with neither or both directions.
    Neutral,
}

/// Structured movement flags decoded from a packed keystate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementFlags {
    pub boost: bool,
    pub flagspeed: bool,
    pub stealthed: bool,
    pub strafe: Strafe,
    /// The raw packed value the flags were decoded from.
    pub keystate: u32,
}

/// Decodes a packed keystate into [`MovementFlags`].
///
/// Returns `None` when `packed` has bits outside [`KEYSTATE_MASK`].
///
/// # Examples
///
/// ```rust
/// use ab_core::protocol::keystate::{decode_movement, keys, Strafe};
///
/// let flags = decode_movement(keys::BOOST | keys::STRAFE | keys::LEFT).unwrap();
/// assert!(flags.boost);
/// assert_eq!(flags.strafe, Strafe::Left);
///
/// assert_eq!(decode_movement(0x1_00), None);
/// ```
pub fn decode_movement(packed: u32) -> Option<MovementFlags> {
    if packed & !KEYSTATE_MASK != 0 {
        return None;
    }

    Some(MovementFlags {
        boost: packed & keys::BOOST != 0,
        flagspeed: packed & keys::FLAGSPEED != 0,
        stealthed: packed & keys::STEALTH != 0,
        strafe: decode_strafe(packed),
        keystate: packed,
    })
}

fn decode_strafe(packed: u32) -> Strafe {
    if packed & keys::STRAFE == 0 {
        return Strafe::None;
    }
    match (packed & keys::LEFT != 0, packed & keys::RIGHT != 0) {
        (true, false) => Strafe::Left,
        (false, true) => Strafe::Right,
        _ => Strafe::Neutral,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
