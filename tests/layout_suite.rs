use vizlayout::config::{RadialConfig, ScheduleConfig};
use vizlayout::date::CivilDate;
use vizlayout::geometry::{BoxShape, NodeBox, Point};
use vizlayout::ir::{Granularity, ScheduleTask, TreeNode};
use vizlayout::layout::{compute_radial_layout, compute_schedule_layout, route};

/// Small deterministic generator so property runs are reproducible
/// without a rand dependency.
struct XorShift(u64);

impl XorShift {
    fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    fn next_f32(&mut self, low: f32, high: f32) -> f32 {
        let unit = (self.next_u64() >> 11) as f32 / (1u64 << 53) as f32;
        low + unit * (high - low)
    }

    fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

fn random_box(rng: &mut XorShift, cx: f32, cy: f32) -> NodeBox {
    let shape = match rng.next_usize(3) {
        0 => BoxShape::Rect,
        1 => BoxShape::Ellipse,
        _ => BoxShape::Diamond,
    };
    NodeBox::new(
        cx,
        cy,
        rng.next_f32(10.0, 160.0),
        rng.next_f32(10.0, 120.0),
    )
    .with_shape(shape)
}

fn on_outline(node: &NodeBox, point: Point) -> bool {
    let nx = (point.x - node.x) / node.half_width;
    let ny = (point.y - node.y) / node.half_height;
    let norm = match node.shape {
        BoxShape::Rect => nx.abs().max(ny.abs()),
        BoxShape::Ellipse => (nx * nx + ny * ny).sqrt(),
        BoxShape::Diamond => nx.abs() + ny.abs(),
    };
    (norm - 1.0).abs() < 1e-3
}

#[test]
fn routed_endpoints_stay_on_their_own_outline() {
    let mut rng = XorShift::new(0x5eed);
    for _ in 0..1000 {
        // Centers far enough apart that boxes can never overlap.
        let (ax, ay) = (rng.next_f32(-200.0, 0.0), rng.next_f32(-200.0, 0.0));
        let (bx, by) = (rng.next_f32(500.0, 900.0), rng.next_f32(500.0, 900.0));
        let a = random_box(&mut rng, ax, ay);
        let b = random_box(&mut rng, bx, by);
        let edge = route(&a, &b);
        assert!(on_outline(&a, edge.source_point), "source off outline: {a:?}");
        assert!(on_outline(&b, edge.target_point), "target off outline: {b:?}");
    }
}

fn random_tree(rng: &mut XorShift, depth: usize, next_id: &mut u32) -> TreeNode {
    let id = format!("n{}", *next_id);
    *next_id += 1;
    let child_count = if depth == 0 { 0 } else { rng.next_usize(4) };
    TreeNode::with_children(
        id,
        (0..child_count)
            .map(|_| random_tree(rng, depth - 1, next_id))
            .collect(),
    )
}

#[test]
fn radial_layout_is_deterministic_and_covering() {
    let config = RadialConfig::default();
    let mut rng = XorShift::new(42);
    for _ in 0..50 {
        let mut next_id = 0;
        let tree = random_tree(&mut rng, 4, &mut next_id);
        let first = compute_radial_layout(&tree, &config).unwrap();
        let second = compute_radial_layout(&tree, &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), tree.node_count());

        let root = &first[&tree.id];
        assert_eq!((root.x, root.y, root.depth), (0.0, 0.0, 0));
    }
}

fn random_schedule(rng: &mut XorShift, count: usize) -> Vec<ScheduleTask> {
    let epoch = CivilDate::new(2025, 1, 1);
    (0..count)
        .map(|i| {
            let start = epoch.add_days(rng.next_usize(200) as i64);
            let end = start.add_days(rng.next_usize(30) as i64);
            let mut task = ScheduleTask::new(format!("t{i}"), start, end);
            if i > 0 && rng.next_usize(3) == 0 {
                task = task.after(format!("t{}", rng.next_usize(i)));
            }
            task
        })
        .collect()
}

#[test]
fn schedule_layout_is_deterministic_and_monotonic() {
    let config = ScheduleConfig::default();
    let mut rng = XorShift::new(7);
    for _ in 0..30 {
        let count = 1 + rng.next_usize(20);
        let tasks = random_schedule(&mut rng, count);
        for granularity in [Granularity::Day, Granularity::Week, Granularity::Month] {
            let first = compute_schedule_layout(&tasks, granularity, &config).unwrap();
            let second = compute_schedule_layout(&tasks, granularity, &config).unwrap();
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );

            assert_eq!(first.bars.len(), tasks.len());
            for arc in &first.arcs {
                // Every emitted arc draws strictly forward.
                assert!(arc.end.x > arc.start.x);
            }
            for task in &tasks {
                let start_col = first.columns.first().unwrap().anchor;
                let end_col = first.columns.last().unwrap().anchor;
                assert!(task.start > start_col);
                assert!(task.end < granularity.next(end_col));
            }
        }
    }
}

#[test]
fn full_pipeline_smoke() {
    // A tree layout feeding the router, the way the presentation layer
    // consumes both: place nodes radially, wrap them in boxes, route
    // the parent-child connectors.
    let tree = TreeNode::with_children(
        "root",
        vec![
            TreeNode::with_children("plan", vec![TreeNode::new("scope"), TreeNode::new("risks")]),
            TreeNode::new("build"),
            TreeNode::new("ship"),
        ],
    );
    let points = compute_radial_layout(&tree, &RadialConfig::default()).unwrap();
    let boxed = |id: &str| {
        let p = &points[id];
        NodeBox::new(p.x, p.y, 120.0, 48.0)
    };
    for (parent, child) in [("root", "plan"), ("plan", "scope"), ("plan", "risks")] {
        let edge = route(&boxed(parent), &boxed(child));
        assert!(edge.source_point.x.is_finite());
        let gap = edge.source_point.distance(edge.target_point);
        let centers = boxed(parent).center().distance(boxed(child).center());
        assert!(gap < centers, "{parent}->{child}: endpoints outside centers span");
    }
}
