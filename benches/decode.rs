//! Benchmarks for datagram decode and full model application.
//!
//! The feed delivers packets at up to 60 Hz with several packets per cycle;
//! a full apply must stay comfortably under a millisecond to leave headroom
//! for the observer side.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use paddock::SessionMapper;
use paddock::packets::PacketDecoder;
use paddock::packets::testutil::{
    LapCar, Participant, StatusCar, TelemetryCar, lap_packet_bytes, participants_packet_bytes,
    session_packet_bytes, status_packet_bytes, telemetry_packet_bytes,
};

/// One realistic update cycle worth of packets in a single datagram.
fn full_cycle_datagram() -> Vec<u8> {
    let mut datagram = session_packet_bytes(17, 10, 71, 0);
    let roster: Vec<Participant> = (0..20)
        .map(|i| Participant {
            index: i,
            driver_id: 9 + i as u8,
            team_id: (i % 10) as u8,
            race_number: i as u8 + 1,
            name: "Benchmark Driver",
        })
        .collect();
    datagram.extend_from_slice(&participants_packet_bytes(20, &roster));

    let laps: Vec<LapCar> = (0..20)
        .map(|i| LapCar {
            index: i,
            current_lap_num: 12,
            last_lap_time: 93.5 + i as f32 * 0.2,
            car_position: i as u8 + 1,
            result_status: 2,
            driver_status: 4,
            ..LapCar::default()
        })
        .collect();
    datagram.extend_from_slice(&lap_packet_bytes(0, &laps));

    let telemetry: Vec<TelemetryCar> = (0..20)
        .map(|i| TelemetryCar {
            index: i,
            speed_kmh: 280,
            engine_temperature: 105,
            brakes_temperature: [400, 410, 650, 660],
            tyres_surface_temperature: [88, 89, 94, 95],
            tyres_inner_temperature: [98, 99, 102, 103],
        })
        .collect();
    datagram.extend_from_slice(&telemetry_packet_bytes(&telemetry));

    let status: Vec<StatusCar> = (0..20)
        .map(|i| StatusCar {
            index: i,
            actual_tyre_compound: 16,
            visual_tyre_compound: 16,
            tyres_wear: [20, 21, 30, 31],
            tyres_damage: [10, 10, 15, 15],
            ..StatusCar::default()
        })
        .collect();
    datagram.extend_from_slice(&status_packet_bytes(&status));

    datagram
}

fn bench_decode_only(c: &mut Criterion) {
    let datagram = full_cycle_datagram();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(datagram.len() as u64));
    group.bench_function("full_cycle_datagram", |b| {
        b.iter(|| {
            let mut decoder = PacketDecoder::new();
            let mut offset = 0;
            while offset < datagram.len() {
                offset += decoder.decode_packet(black_box(&datagram[offset..])).unwrap();
            }
            black_box(offset)
        });
    });
    group.finish();
}

fn bench_apply_cycle(c: &mut Criterion) {
    let datagram = full_cycle_datagram();

    let mut group = c.benchmark_group("apply");
    group.throughput(Throughput::Bytes(datagram.len() as u64));
    group.bench_function("mapper_apply_datagram", |b| {
        let mut mapper = SessionMapper::new();
        b.iter(|| {
            mapper.apply_datagram(black_box(&datagram)).unwrap();
        });
    });
    group.bench_function("mapper_apply_and_snapshot", |b| {
        let mut mapper = SessionMapper::new();
        b.iter(|| {
            mapper.apply_datagram(black_box(&datagram)).unwrap();
            black_box(mapper.model().clone())
        });
    });
    group.finish();
}

criterion_group!(benches, bench_decode_only, bench_apply_cycle);
criterion_main!(benches);
