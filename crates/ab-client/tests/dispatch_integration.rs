//! Integration tests for the client dispatch pipeline.
//!
//! These tests drive wire bytes through the public API: frames are encoded,
//! split with `decode_frames`, fed to a `ClientEngine`, and the resulting
//! state and derived events are checked through an observer handler.

use std::sync::{Arc, Mutex};

use ab_client::application::engine::{ClientEngine, EngineOptions};
use ab_client::application::event_queue::EventQueue;
use ab_client::application::events::{EventArgs, EventKind, EventMessage};
use ab_client::application::handlers::{HandlerError, MessageHandler};
use ab_client::infrastructure::capture::decode_frames;
use ab_core::protocol::keystate::keys;
use ab_core::protocol::messages::{
    ChatPublicPacket, PlayerLeavePacket, PlayerMotionPacket, PlayerNewPacket, ScoreUpdatePacket,
};
use ab_core::{encode_packet, GameState, Pos, ServerPacket, Strafe};

/// Records every derived event as `(kind, player_id)`.
#[derive(Default)]
struct DerivedRecorder {
    seen: Mutex<Vec<(EventKind, u16)>>,
}

impl MessageHandler for DerivedRecorder {
    fn name(&self) -> &'static str {
        "derived_recorder"
    }

    fn handles(&self) -> &'static [EventKind] {
        &[
            EventKind::PlayerAdded,
            EventKind::PlayerRemoved,
            EventKind::PlayerChange,
            EventKind::ChatMessage,
        ]
    }

    fn exec(&self, event: &EventMessage, _: &mut GameState, _: &mut EventQueue) -> Result<(), HandlerError> {
        let id = match event.args() {
            EventArgs::Player(p) => p.player_id,
            EventArgs::Chat(c) => c.player_id,
            _ => u16::MAX,
        };
        self.seen.lock().unwrap().push((event.kind(), id));
        Ok(())
    }
}

fn join(id: u16, name: &str) -> ServerPacket {
    ServerPacket::PlayerNew(PlayerNewPacket {
        id,
        name: name.to_string(),
        pos_x: 0.0,
        pos_y: 0.0,
        rot: 0.0,
    })
}

fn bounce(id: u16, keystate: u16) -> ServerPacket {
    ServerPacket::PlayerBounce(PlayerMotionPacket {
        id,
        keystate,
        pos_x: -120.0,
        pos_y: 640.5,
        rot: 3.1,
        speed_x: 2.0,
        speed_y: -1.5,
    })
}

fn replay(packets: &[ServerPacket]) -> (ClientEngine, Arc<DerivedRecorder>) {
    let wire: Vec<u8> = packets
        .iter()
        .flat_map(|p| encode_packet(p).expect("encode must succeed"))
        .collect();
    let decoded = decode_frames(&wire);
    assert_eq!(decoded.error, None, "capture must decode cleanly");

    let recorder = Arc::new(DerivedRecorder::default());
    let mut engine = ClientEngine::new(
        EngineOptions::default(),
        vec![Arc::clone(&recorder) as Arc<dyn MessageHandler>],
    );
    for packet in decoded.packets {
        engine.handle_packet(packet);
    }
    (engine, recorder)
}

#[test]
fn test_session_from_wire_bytes_builds_expected_state() {
    // Arrange
    let packets = vec![
        join(1, "alpha"),
        join(2, "bravo"),
        bounce(1, (keys::UP | keys::BOOST | keys::STRAFE | keys::LEFT) as u16),
        ServerPacket::ScoreUpdate(ScoreUpdatePacket {
            id: 2,
            score: 300,
            earnings: 40,
            totalkills: 6,
            totaldeaths: 3,
        }),
        ServerPacket::ChatPublic(ChatPublicPacket {
            id: 2,
            text: "nice".to_string(),
        }),
        ServerPacket::PlayerLeave(PlayerLeavePacket { id: 1 }),
    ];

    // Act
    let (engine, recorder) = replay(&packets);

    // Assert
    let state = engine.state();
    assert_eq!(state.player_count(), 1);
    assert!(state.get_player_by_id(1).is_none());
    let bravo = state.get_player_by_id(2).unwrap();
    assert_eq!((bravo.score, bravo.kills, bravo.deaths), (300, 6, 3));

    assert_eq!(
        *recorder.seen.lock().unwrap(),
        vec![
            (EventKind::PlayerAdded, 1),
            (EventKind::PlayerAdded, 2),
            (EventKind::PlayerChange, 1),
            (EventKind::PlayerChange, 2),
            (EventKind::ChatMessage, 2),
            (EventKind::PlayerRemoved, 1),
        ]
    );
}

#[test]
fn test_bounce_applies_decoded_flags_and_exact_motion() {
    // Arrange
    let ks = (keys::STRAFE | keys::LEFT | keys::STEALTH) as u16;

    // Act
    let (engine, _) = replay(&[join(5, "echo"), bounce(5, ks)]);

    // Assert
    let player = engine.state().get_player_by_id(5).unwrap();
    assert_eq!(player.strafe, Strafe::Left);
    assert!(player.stealthed);
    assert!(!player.boost);
    assert_eq!(player.pos, Pos::new(-120.0, 640.5));
    assert_eq!(player.rot, 3.1);
    assert_eq!(player.speed, Pos::new(2.0, -1.5));
}

#[test]
fn test_events_for_unknown_players_produce_no_derived_events() {
    // Act
    let (engine, recorder) = replay(&[
        bounce(3, 0),
        ServerPacket::ScoreUpdate(ScoreUpdatePacket {
            id: 3,
            score: 1,
            earnings: 1,
            totalkills: 1,
            totaldeaths: 1,
        }),
        ServerPacket::ChatPublic(ChatPublicPacket {
            id: 3,
            text: "ghost".to_string(),
        }),
        ServerPacket::PlayerLeave(PlayerLeavePacket { id: 3 }),
    ]);

    // Assert
    assert_eq!(engine.state().player_count(), 0);
    assert!(recorder.seen.lock().unwrap().is_empty());
}

#[test]
fn test_truncated_capture_keeps_complete_frames() {
    // Arrange
    let mut wire = encode_packet(&join(1, "kept")).unwrap();
    let second = encode_packet(&join(2, "cut")).unwrap();
    wire.extend_from_slice(&second[..second.len() - 2]);

    // Act
    let decoded = decode_frames(&wire);

    // Assert
    assert_eq!(decoded.packets, vec![join(1, "kept")]);
    assert!(decoded.error.is_some());
}
