//! Protocol module containing packet types, the binary codec, and the
//! keystate decoder.

pub mod codec;
pub mod keystate;
pub mod messages;

pub use codec::{decode_packet, encode_packet, ProtocolError};
pub use keystate::{decode_movement, MovementFlags, Strafe};
pub use messages::*;
