use pretty_assertions::assert_eq;
use rowfold_core::stmt::{Value, ValueRecord};
use serde_json::json;

#[test]
fn object_to_record() {
    let record = ValueRecord::try_from(json!({
        "id": 1,
        "name": "a",
        "active": true,
        "deleted_at": null,
        "tags": ["x", "y"],
        "owner": { "id": 2 },
    }))
    .unwrap();

    assert_eq!(record["id"], 1i64);
    assert_eq!(record["name"], "a");
    assert_eq!(record["active"], true);
    assert!(record["deleted_at"].is_null());
    assert!(record.contains("deleted_at"));
    assert_eq!(
        record["tags"],
        Value::List(vec![Value::from("x"), Value::from("y")])
    );
    assert_eq!(record["owner"].expect_record()["id"], 2i64);
}

#[test]
fn attribute_order_survives_round_trip() {
    let src = json!({ "z": 1, "a": 2, "m": 3 });
    let record = ValueRecord::try_from(src.clone()).unwrap();

    assert_eq!(record.keys().collect::<Vec<_>>(), ["z", "a", "m"]);
    assert_eq!(serde_json::Value::from(record).to_string(), src.to_string());
}

#[test]
fn non_object_row_is_invalid() {
    let err = ValueRecord::try_from(json!([1, 2])).unwrap_err();

    assert!(err.is_invalid_row());
    assert_eq!(err.to_string(), "invalid row: expected object, got [1,2]");
}

#[test]
fn float_becomes_f64() {
    let record = ValueRecord::try_from(json!({ "price": 9.99, "whole": 1.0 })).unwrap();

    assert_eq!(record["price"], 9.99f64);
    assert_eq!(record["whole"], Value::F64(1.0));
    assert_eq!(
        serde_json::Value::from(record),
        json!({ "price": 9.99, "whole": 1.0 })
    );
}

#[test]
fn integer_above_i64_is_a_type_conversion_error() {
    let err = ValueRecord::try_from(json!({ "big": u64::MAX })).unwrap_err();

    assert_eq!(
        err.to_string(),
        "attribute `big`: cannot convert number 18446744073709551615 to Value"
    );
}

#[test]
fn uuid_renders_as_string() {
    let id = uuid::Uuid::nil();
    let json = serde_json::Value::from(Value::from(id));

    assert_eq!(json, json!("00000000-0000-0000-0000-000000000000"));
}
