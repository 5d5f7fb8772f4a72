use criterion::{black_box, criterion_group, criterion_main, Criterion};

use delve::combat::resolve;
use delve::entities::{Fighter, MonsterKind};
use delve::world::generation::generate_room;
use delve::{GameRng, Position, World};

fn bench_generation(c: &mut Criterion) {
    c.bench_function("generate_room", |b| {
        let mut rng = GameRng::new(1);
        b.iter(|| black_box(generate_room(&mut rng, None)))
    });

    c.bench_function("explore_32x32", |b| {
        b.iter(|| {
            let mut rng = GameRng::new(2);
            let mut world = World::new();
            for x in 0..32 {
                for y in 0..32 {
                    world.room(Position::new(x, y), &mut rng);
                }
            }
            black_box(world.explored())
        })
    });
}

fn bench_combat(c: &mut Criterion) {
    c.bench_function("resolve_giant_spider", |b| {
        let mut rng = GameRng::new(3);
        b.iter(|| {
            let mut player = Fighter::new("hero", 100, 10);
            let mut spider = MonsterKind::GiantSpider.spawn().fighter;
            black_box(resolve(&mut player, &mut spider, &mut rng))
        })
    });
}

criterion_group!(benches, bench_generation, bench_combat);
criterion_main!(benches);
