use qsparser::{decode_to_value, parse, Value};
use rstest::rstest;
use serde_json::{json, Value as JsonValue};

fn decode(input: &str) -> JsonValue {
    decode_to_value(input).unwrap_or_else(|err| panic!("decode failed for {input:?}: {err}"))
}

fn keys(value: &Value) -> Vec<&str> {
    value
        .as_map()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

#[rstest]
#[case(
    "a[b]=c&d[e]=f&d[g]=h",
    json!({"a": {"b": "c"}, "d": {"e": "f", "g": "h"}})
)]
#[case(
    "a[0]=1&a[1]=2&a[2]=3&b[0]=q&b[1]=w&b[2]=e",
    json!({"a": ["1", "2", "3"], "b": ["q", "w", "e"]})
)]
#[case(
    "a[0][n]=John&a[0][a]=15&a[1][n]=Peter&a[1][a]=18&b[0][n]=Jack&b[0][a]=17",
    json!({
        "a": [{"n": "John", "a": "15"}, {"n": "Peter", "a": "18"}],
        "b": [{"n": "Jack", "a": "17"}]
    })
)]
#[case(
    "a[0][n][0]=John&a[0][n][1]=15&a[1][n][0]=Peter&a[1][n][1]=18&b[0][n][0]=Jack&b[0][n][1]=17",
    json!({
        "a": [{"n": ["John", "15"]}, {"n": ["Peter", "18"]}],
        "b": [{"n": ["Jack", "17"]}]
    })
)]
#[case(
    "_includes[0][favorites][_includes][0]=user",
    json!({"_includes": [{"favorites": {"_includes": ["user"]}}]})
)]
#[case("a[0]=x&a[1]=null", json!({"a": ["x", null]}))]
#[case("a[x][0]=1&a[y]=2", json!({"a": {"x": ["1"], "y": "2"}}))]
#[case("a[]=1", json!({"a": {"": "1"}}))]
#[case("a[b%20c][0]=d", json!({"a": {"b c": ["d"]}}))]
fn builds_nested_structure(#[case] input: &str, #[case] expected: JsonValue) {
    assert_eq!(decode(input), expected);
}

#[rstest]
#[case("a[1]=x")]
#[case("a[0]=x&a[2]=y")]
#[case("a[1]=y&a[0]=x")]
#[case("a[0]=x&a[b]=y")]
#[case("a[00]=x")]
#[case("a[-0]=x")]
fn non_index_keys_stay_mapping(#[case] input: &str) {
    let map = parse(input).unwrap();
    assert!(map["a"].is_mapping(), "{input} -> {}", map["a"]);
}

#[rstest]
fn out_of_order_indices_keep_arrival_order() {
    let map = parse("a[1]=y&a[0]=x").unwrap();
    assert_eq!(keys(&map["a"]), ["1", "0"]);
}

#[rstest]
fn object_keys_keep_arrival_order() {
    let map = parse("d[g]=h&d[e]=f&a[b]=c").unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), ["d", "a"]);
    assert_eq!(keys(&map["d"]), ["g", "e"]);
}

#[rstest]
#[case("0=a&1=b", json!({"0": "a", "1": "b"}))]
#[case("0[0]=a", json!({"0": ["a"]}))]
fn root_never_becomes_sequence(#[case] input: &str, #[case] expected: JsonValue) {
    let map = parse(input).unwrap();
    assert!(Value::Mapping(map).is_mapping());
    assert_eq!(decode(input), expected);
}

#[rstest]
fn sequence_shape_is_decided_per_node() {
    let map = parse("a[0][0]=x&a[0][2]=y&a[1][0]=z").unwrap();
    let outer = map["a"].as_seq().unwrap();
    assert!(outer[0].is_mapping());
    assert!(outer[1].is_sequence());
}

#[rstest]
fn revisiting_an_index_merges_into_it() {
    assert_eq!(
        decode("a[0][x]=1&a[1][x]=2&a[0][y]=3"),
        json!({"a": [{"x": "1", "y": "3"}, {"x": "2"}]})
    );
}
