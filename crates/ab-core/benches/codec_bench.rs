//! Criterion benchmarks for the packet codec and keystate decoder.
//!
//! Motion packets (PLAYER_UPDATE / PLAYER_BOUNCE) dominate the inbound
//! stream, so they get their own hot-path group.
//!
//! Run with:
//! ```bash
//! cargo bench --package ab-core --bench codec_bench
//! ```

use ab_core::protocol::codec::{decode_packet, encode_packet};
use ab_core::protocol::keystate::decode_movement;
use ab_core::protocol::messages::{
    ChatPublicPacket, PlayerLeavePacket, PlayerMotionPacket, PlayerNewPacket, ScoreUpdatePacket,
    ServerPacket,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// ── Packet fixtures ───────────────────────────────────────────────────────────

fn make_motion() -> PlayerMotionPacket {
    PlayerMotionPacket {
        id: 17,
        keystate: 0x35,
        pos_x: -4096.5,
        pos_y: 2048.25,
        rot: 1.57,
        speed_x: 3.5,
        speed_y: -1.25,
    }
}

fn fixtures() -> Vec<(&'static str, ServerPacket)> {
    vec![
        (
            "PlayerNew",
            ServerPacket::PlayerNew(PlayerNewPacket {
                id: 17,
                name: "benchmark-pilot".to_string(),
                pos_x: 0.0,
                pos_y: 0.0,
                rot: 0.0,
            }),
        ),
        ("PlayerLeave", ServerPacket::PlayerLeave(PlayerLeavePacket { id: 17 })),
        ("PlayerUpdate", ServerPacket::PlayerUpdate(make_motion())),
        ("PlayerBounce", ServerPacket::PlayerBounce(make_motion())),
        (
            "ScoreUpdate",
            ServerPacket::ScoreUpdate(ScoreUpdatePacket {
                id: 17,
                score: 1_250,
                earnings: 800,
                totalkills: 9,
                totaldeaths: 3,
            }),
        ),
        (
            "ChatPublic",
            ServerPacket::ChatPublic(ChatPublicPacket {
                id: 17,
                text: "gg everyone, rematch?".to_string(),
            }),
        ),
    ]
}

// ── Benchmark functions ───────────────────────────────────────────────────────

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_packet");
    for (name, packet) in fixtures() {
        let bytes = encode_packet(&packet).expect("encode must succeed for benchmark setup");
        group.bench_with_input(BenchmarkId::new("packet", name), &bytes, |b, bytes| {
            b.iter(|| decode_packet(black_box(bytes)).expect("decode must succeed"))
        });
    }
    group.finish();
}

fn bench_motion_hot_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("motion_hot_path");

    let bounce = encode_packet(&ServerPacket::PlayerBounce(make_motion())).unwrap();
    group.bench_function("decode_bounce_and_keystate", |b| {
        b.iter(|| {
            let (packet, _) = decode_packet(black_box(&bounce)).unwrap();
            match packet {
                ServerPacket::PlayerBounce(m) => decode_movement(u32::from(m.keystate)),
                _ => None,
            }
        })
    });

    group.bench_function("decode_movement", |b| {
        b.iter(|| decode_movement(black_box(0x35)))
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_motion_hot_path);
criterion_main!(benches);
