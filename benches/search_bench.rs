use criterion::{criterion_group, criterion_main, Criterion, black_box};
use netbot::board::{Board, Color, Move};

fn midgame() -> Board {
    let mut b = Board::new(Color::Black);
    let black = [(2, 0), (2, 3), (4, 2), (5, 5)];
    let white = [(0, 2), (3, 4), (6, 1), (7, 4)];
    for (bm, wm) in black.iter().zip(white.iter()) {
        b.apply_move(&Move::add(bm.0, bm.1), Color::Black);
        b.apply_move(&Move::add(wm.0, wm.1), Color::White);
    }
    b
}

fn bench_search(c: &mut Criterion) {
    let b = midgame();
    c.bench_function("search_depth_1_midgame", |ben| {
        ben.iter(|| {
            let mut s = netbot::search::Searcher::new();
            let r = s.search_depth(black_box(&b), Color::Black, 1);
            black_box(r.nodes)
        })
    });
    c.bench_function("evaluate_midgame", |ben| {
        ben.iter(|| black_box(netbot::search::evaluate(black_box(&b), Color::Black)))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
