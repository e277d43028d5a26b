use rowfold_core::stmt::{GroupIndex, Value, ValueRecord};

fn rows() -> Vec<ValueRecord> {
    vec![
        ValueRecord::from([("pid", Value::from(1)), ("x", Value::from("a"))]),
        ValueRecord::from([("pid", Value::from(2)), ("x", Value::from("b"))]),
        ValueRecord::from([("pid", Value::from(1)), ("x", Value::from("c"))]),
        ValueRecord::from([("pid", Value::Null), ("x", Value::from("d"))]),
        ValueRecord::from([("x", Value::from("e"))]),
    ]
}

#[test]
fn groups_keep_source_order() {
    let rows = rows();
    let index = GroupIndex::new(&rows, "pid");

    let found: Vec<_> = index
        .find(&Value::from(1))
        .iter()
        .map(|row| row["x"].clone())
        .collect();
    assert_eq!(found, [Value::from("a"), Value::from("c")]);
    assert_eq!(index.find(&Value::from(2)).len(), 1);
    assert_eq!(index.len(), 2);
}

#[test]
fn null_and_missing_keys_are_not_indexed() {
    let rows = rows();
    let index = GroupIndex::new(&rows, "pid");

    assert!(index.find(&Value::Null).is_empty());
}

#[test]
fn lookup_is_type_strict() {
    let rows = rows();
    let index = GroupIndex::new(&rows, "pid");

    assert!(index.find(&Value::from("1")).is_empty());
    assert!(index.find(&Value::from(3)).is_empty());
}

#[test]
fn empty_source() {
    let index = GroupIndex::new(&[], "pid");
    assert!(index.is_empty());
    assert!(index.find(&Value::from(1)).is_empty());
}
