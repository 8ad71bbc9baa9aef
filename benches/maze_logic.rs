use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maze_escape::core::{rng, MazeGame, MazeGenerator};
use maze_escape::term::MazeView;
use maze_escape::types::{Direction, MAX_MAZE_SIZE};

fn bench_generate(c: &mut Criterion) {
    let mut generator = MazeGenerator::new(rng::seeded(12345));

    c.bench_function("generate_20x20", |b| {
        b.iter(|| generator.generate(black_box(MAX_MAZE_SIZE)))
    });
}

fn bench_attempt_move(c: &mut Criterion) {
    let mut game = MazeGame::new(MAX_MAZE_SIZE, rng::seeded(12345)).unwrap();

    // Down then up along the corridor never reaches the exit.
    c.bench_function("attempt_move", |b| {
        b.iter(|| {
            game.attempt_move(black_box(Direction::Down));
            game.attempt_move(black_box(Direction::Up));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let game = MazeGame::new(MAX_MAZE_SIZE, rng::seeded(12345)).unwrap();
    let view = MazeView::default();

    c.bench_function("render_20x20", |b| {
        b.iter(|| view.render(black_box(&game.snapshot())))
    });
}

criterion_group!(benches, bench_generate, bench_attempt_move, bench_render);
criterion_main!(benches);
