//! Integration tests for the ab-core public API.
//!
//! These tests decode a realistic stream of concatenated frames and apply the
//! result to a `GameState`, exercising the codec, the keystate decoder, and
//! the state model together.

use ab_core::{
    decode_movement, decode_packet, encode_packet,
    protocol::messages::{
        ChatPublicPacket, PlayerLeavePacket, PlayerMotionPacket, PlayerNewPacket,
        ScoreUpdatePacket,
    },
    GameState, Player, ProtocolError, ServerPacket, Strafe,
};

fn stream(packets: &[ServerPacket]) -> Vec<u8> {
    packets
        .iter()
        .flat_map(|p| encode_packet(p).expect("encode must succeed"))
        .collect()
}

fn decode_all(mut bytes: &[u8]) -> Result<Vec<ServerPacket>, ProtocolError> {
    let mut out = Vec::new();
    while !bytes.is_empty() {
        let (packet, used) = decode_packet(bytes)?;
        out.push(packet);
        bytes = &bytes[used..];
    }
    Ok(out)
}

#[test]
fn test_stream_of_every_packet_type_decodes_in_order() {
    let packets = vec![
        ServerPacket::PlayerNew(PlayerNewPacket {
            id: 7,
            name: "seven".to_string(),
            pos_x: 10.0,
            pos_y: 20.0,
            rot: 0.0,
        }),
        ServerPacket::PlayerUpdate(PlayerMotionPacket {
            id: 7,
            keystate: 0x11,
            pos_x: 11.0,
            pos_y: 21.0,
            rot: 0.1,
            speed_x: 1.0,
            speed_y: 1.0,
        }),
        ServerPacket::ScoreUpdate(ScoreUpdatePacket {
            id: 7,
            score: 120,
            earnings: 40,
            totalkills: 4,
            totaldeaths: 1,
        }),
        ServerPacket::ChatPublic(ChatPublicPacket {
            id: 7,
            text: "hello".to_string(),
        }),
        ServerPacket::PlayerLeave(PlayerLeavePacket { id: 7 }),
    ];

    let decoded = decode_all(&stream(&packets)).expect("stream must decode");

    assert_eq!(decoded, packets);
}

#[test]
fn test_truncated_stream_reports_error_after_good_frames() {
    // Arrange – two good frames, then a frame cut in half
    let good = ServerPacket::PlayerLeave(PlayerLeavePacket { id: 1 });
    let mut bytes = stream(&[good.clone(), good.clone()]);
    let tail = encode_packet(&good).unwrap();
    bytes.extend_from_slice(&tail[..3]);

    // Act
    let first = decode_packet(&bytes).unwrap();
    let second = decode_packet(&bytes[first.1..]).unwrap();
    let third = decode_packet(&bytes[first.1 + second.1..]);

    // Assert
    assert_eq!(first.0, good);
    assert_eq!(second.0, good);
    assert!(matches!(third, Err(ProtocolError::InsufficientData { .. })));
}

#[test]
fn test_decoded_bounce_applies_to_state() {
    // Arrange
    let mut state = GameState::new();
    state.add_player(Player::new(3, "three")).unwrap();
    let bytes = encode_packet(&ServerPacket::PlayerBounce(PlayerMotionPacket {
        id: 3,
        keystate: 0x34, // BOOST | STRAFE | LEFT
        pos_x: -5.0,
        pos_y: 6.5,
        rot: 2.0,
        speed_x: -0.5,
        speed_y: 0.25,
    }))
    .unwrap();

    // Act
    let (packet, _) = decode_packet(&bytes).unwrap();
    let ServerPacket::PlayerBounce(motion) = packet else {
        panic!("expected a bounce packet");
    };
    let player = state.get_player_by_id_mut(motion.id).unwrap();
    player.apply_movement(decode_movement(u32::from(motion.keystate)).unwrap());

    // Assert
    let player = state.get_player_by_id(3).unwrap();
    assert!(player.boost);
    assert_eq!(player.strafe, Strafe::Left);
    assert_eq!(player.keystate, 0x34);
}
