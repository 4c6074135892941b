use overlay_state::{ItemSnapshot, OverrideListBuilder};

fn main() {
    let list = OverrideListBuilder::new()
        .rule("item/bow_broken", |r| r.predicate("ios:damage", "90%"))
        .rule("item/bow_pulling_1", |r| {
            r.threshold("pulling", 1.0).threshold("pull", 0.65)
        })
        .rule("item/bow_pulling_0", |r| r.threshold("pulling", 1.0))
        .build()
        .expect("failed to build overrides");

    let bow = ItemSnapshot::new("bow")
        .with_damage(40, 384)
        .with_property("pulling", 1.0)
        .with_property("pull", 0.3);

    let report = list.select_detailed(&bow);

    println!("{report}");
    println!();
    for outcome in report.outcomes() {
        println!("  {outcome}");
    }
    println!("Duration: {:?}", report.duration());
}
