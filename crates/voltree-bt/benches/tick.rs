use criterion::{black_box, criterion_group, criterion_main, Criterion};
use voltree_bt::{BtNode, Condition, Driver, NullTraceSink, Sequence, TickContext};

#[derive(Default)]
struct World;

fn always_true(_ctx: &TickContext, _world: &World) -> bool {
    true
}

fn bench_tree_tick(c: &mut Criterion) {
    let conditions = (0..32)
        .map(|_| Box::new(Condition::new("always_true", always_true)) as Box<dyn BtNode<World>>)
        .collect::<Vec<_>>();

    let root = Sequence::new(conditions).unwrap();
    let mut driver = Driver::new(Box::new(root));
    let mut world = World;

    c.bench_function("voltree-bt/tick(conditions=32)", |b| {
        b.iter(|| {
            let status = driver.step(&mut world, &mut NullTraceSink, 0.1);
            black_box(status);
        })
    });
}

criterion_group!(benches, bench_tree_tick);
criterion_main!(benches);
