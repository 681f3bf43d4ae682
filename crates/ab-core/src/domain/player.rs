//! Player entity.

use serde::{Deserialize, Serialize};

use crate::protocol::keystate::{MovementFlags, Strafe};

/// Server-assigned player identifier, stable for the player's lifetime.
pub type PlayerId = u16;

/// A 2-D vector used for both position and velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pos {
    pub x: f32,
    pub y: f32,
}

impl Pos {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One player as the client currently believes it to be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,

    pub pos: Pos,
    /// Heading in radians.
    pub rot: f32,
    pub speed: Pos,

    pub boost: bool,
    pub strafe: Strafe,
    pub stealthed: bool,
    pub flagspeed: bool,
    /// Raw packed keystate from the last decodable motion packet.
    pub keystate: u32,

    pub score: u32,
    pub kills: u32,
    pub deaths: u32,
}

impl Player {
    /// Creates a stationary player at the origin with zeroed stats.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            pos: Pos::default(),
            rot: 0.0,
            speed: Pos::default(),
            boost: false,
            strafe: Strafe::None,
            stealthed: false,
            flagspeed: false,
            keystate: 0,
            score: 0,
            kills: 0,
            deaths: 0,
        }
    }

    /// Overwrites every movement flag with the decoded values.
    pub fn apply_movement(&mut self, movement: MovementFlags) {
        self.boost = movement.boost;
        self.flagspeed = movement.flagspeed;
        self.stealthed = movement.stealthed;
        self.strafe = movement.strafe;
        self.keystate = movement.keystate;
    }

    /// Returns the player's current movement flags.
    pub fn movement(&self) -> MovementFlags {
        MovementFlags {
            boost: self.boost,
            flagspeed: self.flagspeed,
            stealthed: self.stealthed,
            strafe: self.strafe,
            keystate: self.keystate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::keystate::{decode_movement, keys};

    #[test]
    fn test_new_player_is_stationary_with_zero_stats() {
        let player = Player::new(5, "rookie");
        assert_eq!(player.id, 5);
        assert_eq!(player.pos, Pos::default());
        assert_eq!(player.speed, Pos::default());
        assert_eq!((player.score, player.kills, player.deaths), (0, 0, 0));
        assert_eq!(player.movement(), MovementFlags::default());
    }

    #[test]
    fn test_apply_movement_round_trips_through_movement() {
        // Arrange
        let mut player = Player::new(1, "ace");
        let flags = decode_movement(keys::BOOST | keys::STRAFE | keys::RIGHT).unwrap();

        // Act
        player.apply_movement(flags);

        // Assert
        assert_eq!(player.movement(), flags);
        assert_eq!(player.strafe, Strafe::Right);
    }
}
