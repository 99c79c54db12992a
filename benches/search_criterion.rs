use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use quince_chess::board::piece::PieceTeam;
use quince_chess::personality::registry::by_name;
use quince_chess::rules::generate::generate_all_valid_moves;
use quince_chess::search::minimax::best_move;
use quince_chess::utils::fen::parse_fen;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTPOS_FEN,
    },
    BenchCase {
        name: "italian_midgame",
        fen: "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
    },
    BenchCase {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    },
];

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_generation");
    for case in CASES {
        let state = parse_fen(case.fen).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(case.name), case, |b, _| {
            b.iter(|| {
                let moves = generate_all_valid_moves(
                    black_box(&state.board),
                    state.turn,
                    &state.rights,
                    None,
                );
                black_box(moves.len())
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_depth_2");
    group.sample_size(10);
    let standard = by_name("standard");
    for case in CASES {
        let state = parse_fen(case.fen).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(case.name), case, |b, _| {
            b.iter(|| {
                best_move(
                    black_box(&state.board),
                    PieceTeam::Light,
                    &state.rights,
                    None,
                    2,
                    &standard,
                    None,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_move_generation, bench_search);
criterion_main!(benches);
