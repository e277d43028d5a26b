use rowfold::Populate;
use serde_json::json;

#[test]
fn deserialize_association() {
    let populate: Populate = serde_json::from_value(json!({
        "alias": "items",
        "parent_pk": "id",
        "fk_to_child": "pid",
        "child_pk": "cid",
    }))
    .unwrap();

    assert_eq!(populate, Populate::new("items", "id", "pid", "cid"));
    assert_eq!(populate.match_key(), "pid");
}

#[test]
fn deserialize_join_row_association() {
    let populate: Populate = serde_json::from_value(json!({
        "alias": "roles",
        "parent_pk": "user_id",
        "fk_to_child": "role_id",
        "child_pk": "id",
        "match_on": "user_id",
    }))
    .unwrap();

    assert_eq!(
        populate,
        Populate::join_row("roles", "user_id", "role_id", "id")
    );
}

#[test]
fn serialize_omits_default_match_on() {
    let json = serde_json::to_value(Populate::new("items", "id", "pid", "cid")).unwrap();

    assert_eq!(
        json,
        json!({
            "alias": "items",
            "parent_pk": "id",
            "fk_to_child": "pid",
            "child_pk": "cid",
        })
    );
}

#[test]
fn missing_field_is_an_error() {
    let err = serde_json::from_value::<Populate>(json!({ "alias": "items" })).unwrap_err();
    let err = rowfold::Error::from(err);

    assert!(err.to_string().contains("missing field"));
}
