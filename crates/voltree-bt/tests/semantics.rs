use voltree_bt::{
    Action, BtNode, BtStatus, Condition, Driver, Fallback, FinalStatus, NullTraceSink, Sequence,
    TickBudget, TickContext, TreeError, VecTraceSink,
};

const DT: f32 = 0.1;

/// Records which leaves were invoked, in order.
#[derive(Debug, Default)]
struct World {
    log: Vec<&'static str>,
}

fn ctx(tick: u64) -> TickContext {
    TickContext {
        tick,
        dt_seconds: DT,
    }
}

fn leaf(name: &'static str, status: BtStatus) -> Box<dyn BtNode<World>> {
    Box::new(Action::new(name, move |_: &TickContext, world: &mut World| {
        world.log.push(name);
        status
    }))
}

#[test]
fn sequence_all_success_ticks_each_child_once() {
    let mut seq = Sequence::new(vec![
        leaf("a", BtStatus::Success),
        leaf("b", BtStatus::Success),
        leaf("c", BtStatus::Success),
    ])
    .unwrap();

    let mut world = World::default();
    let status = seq.tick(&ctx(0), &mut world, &mut NullTraceSink);

    assert_eq!(status, BtStatus::Success);
    assert_eq!(world.log, vec!["a", "b", "c"]);
}

#[test]
fn sequence_short_circuits_on_first_failure() {
    let mut seq = Sequence::new(vec![
        leaf("a", BtStatus::Success),
        leaf("b", BtStatus::Failure),
        leaf("c", BtStatus::Success),
    ])
    .unwrap();

    let mut world = World::default();
    let status = seq.tick(&ctx(0), &mut world, &mut NullTraceSink);

    assert_eq!(status, BtStatus::Failure);
    assert_eq!(world.log, vec!["a", "b"]);
    assert_eq!(seq.running_child(), None);
}

#[test]
fn sequence_short_circuits_on_first_running_and_bookmarks_it() {
    let mut seq = Sequence::new(vec![
        leaf("a", BtStatus::Success),
        leaf("b", BtStatus::Running),
        leaf("c", BtStatus::Success),
    ])
    .unwrap();

    let mut world = World::default();
    let status = seq.tick(&ctx(0), &mut world, &mut NullTraceSink);

    assert_eq!(status, BtStatus::Running);
    assert_eq!(world.log, vec!["a", "b"]);
    assert_eq!(seq.running_child(), Some((1, "b")));
}

#[test]
fn fallback_succeeds_on_first_success() {
    let mut fb = Fallback::new(vec![
        leaf("a", BtStatus::Failure),
        leaf("b", BtStatus::Success),
        leaf("c", BtStatus::Failure),
    ])
    .unwrap();

    let mut world = World::default();
    let status = fb.tick(&ctx(0), &mut world, &mut NullTraceSink);

    assert_eq!(status, BtStatus::Success);
    assert_eq!(world.log, vec!["a", "b"]);
}

#[test]
fn fallback_fails_only_when_all_children_fail() {
    let mut fb = Fallback::new(vec![leaf("a", BtStatus::Failure), leaf("b", BtStatus::Failure)])
        .unwrap();

    let mut world = World::default();
    let status = fb.tick(&ctx(0), &mut world, &mut NullTraceSink);

    assert_eq!(status, BtStatus::Failure);
    assert_eq!(world.log, vec!["a", "b"]);
    assert_eq!(fb.running_child(), None);
}

#[test]
fn fallback_short_circuits_on_first_running_and_bookmarks_it() {
    let mut fb = Fallback::new(vec![
        leaf("a", BtStatus::Failure),
        leaf("b", BtStatus::Running),
        leaf("c", BtStatus::Success),
    ])
    .unwrap();

    let mut world = World::default();
    let status = fb.tick(&ctx(0), &mut world, &mut NullTraceSink);

    assert_eq!(status, BtStatus::Running);
    assert_eq!(world.log, vec!["a", "b"]);
    assert_eq!(fb.running_child(), Some((1, "b")));
}

#[test]
fn side_effect_free_composite_is_idempotent() {
    let mut fb = Fallback::new(vec![
        Box::new(Condition::new("below", |_: &TickContext, v: &i32| *v < 10))
            as Box<dyn BtNode<i32>>,
        Box::new(Condition::new("above", |_: &TickContext, v: &i32| *v > 20)),
    ])
    .unwrap();

    let mut value = 5;
    let first = fb.tick(&ctx(0), &mut value, &mut NullTraceSink);
    let second = fb.tick(&ctx(1), &mut value, &mut NullTraceSink);

    assert_eq!(first, second);
    assert_eq!(first, BtStatus::Success);
}

#[test]
fn empty_composites_fail_to_construct() {
    let seq = Sequence::<World>::new(Vec::new());
    assert_eq!(
        seq.err(),
        Some(TreeError::EmptyComposite { node: "Sequence" })
    );

    let fb = Fallback::<World>::new(Vec::new());
    assert_eq!(
        fb.err(),
        Some(TreeError::EmptyComposite { node: "Fallback" })
    );
}

#[test]
fn two_success_leaves_settle_on_the_first_tick() {
    let seq = Sequence::new(vec![leaf("a", BtStatus::Success), leaf("b", BtStatus::Success)])
        .unwrap();
    let mut driver = Driver::new(Box::new(seq));

    let mut world = World::default();
    let status = driver.step(&mut world, &mut NullTraceSink, DT);

    assert_eq!(status, BtStatus::Success);
    assert_eq!(driver.ticks(), 1);
}

#[test]
fn fallback_keeps_trying_the_failing_child_first() {
    let fb = Fallback::new(vec![leaf("bad", BtStatus::Failure), leaf("good", BtStatus::Success)])
        .unwrap();
    let mut driver = Driver::new(Box::new(fb));

    let mut world = World::default();
    for _ in 0..3 {
        assert_eq!(
            driver.step(&mut world, &mut NullTraceSink, DT),
            BtStatus::Success
        );
    }
    assert_eq!(world.log, vec!["bad", "good", "bad", "good", "bad", "good"]);
}

#[test]
fn run_reports_budget_exhaustion_for_a_tree_that_never_settles() {
    let fb = Fallback::new(vec![leaf("busy", BtStatus::Running)]).unwrap();
    let mut driver = Driver::new(Box::new(fb));

    let mut world = World::default();
    let outcome = driver.run(
        &mut world,
        &mut NullTraceSink,
        &TickBudget {
            max_ticks: 5,
            period: std::time::Duration::ZERO,
        },
    );

    assert_eq!(outcome.status, FinalStatus::OutOfTicks);
    assert_eq!(outcome.ticks, 5);
}

#[test]
fn composites_trace_entry_and_resolution() {
    let mut seq = Sequence::new(vec![leaf("a", BtStatus::Success)])
        .unwrap()
        .with_name("stage");

    let mut world = World::default();
    let mut trace = VecTraceSink::default();
    seq.tick(&ctx(7), &mut world, &mut trace);

    let rendered: Vec<String> = trace
        .events
        .iter()
        .map(|e| format!("{}:{:?}", e.node, e.phase))
        .collect();
    assert_eq!(
        rendered,
        vec![
            "stage:Enter",
            "a:Resolved(Success)",
            "stage:Resolved(Success)"
        ]
    );
    assert!(trace.events.iter().all(|e| e.tick == 7));
}
