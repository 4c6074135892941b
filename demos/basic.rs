use overlay_state::{ItemSnapshot, OverrideList};

fn main() {
    // An apple model with stack-size overrides
    let list = OverrideList::from_json(
        r#"{
            "parent": "item/generated",
            "overrides": [
                {"predicate": {"ios:stacking": ">=32"}, "model": "item/apple_pile"},
                {"predicate": {"ios:stacking": ">1 & <32"}, "model": "item/apple_few"}
            ]
        }"#,
    )
    .expect("failed to load item model");

    println!("{list}");

    for count in [1, 5, 48] {
        let apples = ItemSnapshot::new("apple").with_count(count);
        match list.select(&apples) {
            Some(selection) => println!("{count} apples: {selection}"),
            None => println!("{count} apples: default model"),
        }
    }
}
