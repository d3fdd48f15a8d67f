use std::collections::BTreeMap;

use qsparser::{from_reader, from_slice, from_str, ErrorKind};
use rstest::rstest;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Person {
    n: String,
    a: String,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Query {
    a: Vec<Person>,
    #[serde(default)]
    note: Option<String>,
}

#[rstest]
fn deserializes_nested_structs() {
    let query: Query =
        from_str("a[0][n]=John&a[0][a]=15&a[1][n]=Peter&a[1][a]=18&note=nil").unwrap();
    assert_eq!(
        query,
        Query {
            a: vec![
                Person {
                    n: "John".into(),
                    a: "15".into()
                },
                Person {
                    n: "Peter".into(),
                    a: "18".into()
                },
            ],
            note: None,
        }
    );
}

#[rstest]
fn deserializes_maps_and_slices() {
    let map: BTreeMap<String, Vec<String>> = from_slice(b"b[0]=q&b[1]=w&a[0]=x").unwrap();
    assert_eq!(map["b"], ["q", "w"]);
    assert_eq!(map["a"], ["x"]);
}

#[rstest]
fn deserializes_from_reader() {
    let reader = std::io::Cursor::new("n=Jack&a=17");
    let person: Person = from_reader(reader).unwrap();
    assert_eq!(
        person,
        Person {
            n: "Jack".into(),
            a: "17".into()
        }
    );
}

#[rstest]
fn numbers_are_not_coerced() {
    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct Typed {
        a: u32,
    }
    let err = from_str::<Typed>("a=5").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Deserialize);
}

#[rstest]
fn parse_errors_pass_through() {
    let err = from_str::<Person>("n=%zz").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}
