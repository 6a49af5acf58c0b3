use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use vizlayout::config::{RadialConfig, ScheduleConfig};
use vizlayout::date::CivilDate;
use vizlayout::geometry::NodeBox;
use vizlayout::ir::{Granularity, ScheduleTask, TreeNode};
use vizlayout::layout::{compute_radial_layout, compute_schedule_layout, route};

fn dense_tree(depth: usize, branching: usize, next_id: &mut u32) -> TreeNode {
    let id = format!("n{}", *next_id);
    *next_id += 1;
    if depth == 0 {
        return TreeNode::new(id);
    }
    TreeNode::with_children(
        id,
        (0..branching)
            .map(|_| dense_tree(depth - 1, branching, next_id))
            .collect(),
    )
}

fn chained_schedule(count: usize) -> Vec<ScheduleTask> {
    let epoch = CivilDate::new(2025, 1, 1);
    (0..count)
        .map(|i| {
            let start = epoch.add_days(i as i64 * 3);
            let mut task = ScheduleTask::new(format!("t{i}"), start, start.add_days(5));
            if i > 0 {
                task = task.after(format!("t{}", i - 1));
            }
            task
        })
        .collect()
}

fn bench_radial(c: &mut Criterion) {
    let config = RadialConfig::default();
    let mut group = c.benchmark_group("radial");
    for (depth, branching) in [(3usize, 4usize), (4, 4), (5, 3)] {
        let mut next_id = 0;
        let tree = dense_tree(depth, branching, &mut next_id);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("d{depth}b{branching}")),
            &tree,
            |b, tree| b.iter(|| compute_radial_layout(black_box(tree), &config).unwrap()),
        );
    }
    group.finish();
}

fn bench_schedule(c: &mut Criterion) {
    let config = ScheduleConfig::default();
    let mut group = c.benchmark_group("schedule");
    for count in [10usize, 100, 500] {
        let tasks = chained_schedule(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &tasks, |b, tasks| {
            b.iter(|| compute_schedule_layout(black_box(tasks), Granularity::Week, &config).unwrap())
        });
    }
    group.finish();
}

fn bench_routing(c: &mut Criterion) {
    let boxes: Vec<NodeBox> = (0..256)
        .map(|i| NodeBox::new((i % 16) as f32 * 200.0, (i / 16) as f32 * 120.0, 120.0, 48.0))
        .collect();
    c.bench_function("route_256_pairs", |b| {
        b.iter(|| {
            for pair in boxes.windows(2) {
                black_box(route(&pair[0], &pair[1]));
            }
        })
    });
}

criterion_group!(benches, bench_radial, bench_schedule, bench_routing);
criterion_main!(benches);
