//! Integration tests for csvtable

use csvtable::{from_csv, parse, serialize, to_csv, Delimiter, ParseOptions, Value};

fn strings(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.iter().map(|s| s.to_string()).collect())
        .collect()
}

fn values(rows: &[&[&str]]) -> Vec<Value> {
    rows.iter()
        .map(|r| Value::from(r.to_vec()))
        .collect()
}

#[test]
fn test_plain_roundtrip() {
    let data: &[&[&str]] = &[
        &["id", "name", "city"],
        &["1", "Alice", "NYC"],
        &["2", "Bob"],
        &["3", "Carol", "SF", "extra"],
    ];

    for delim in [',', ';', '\t', '|'] {
        let text = serialize(&values(data), Delimiter::new(delim));
        let table = parse(&text, &ParseOptions::new().delimiter(delim));
        assert_eq!(table.rows(), &strings(data)[..]);
        assert_eq!(table.column_count(), 4);
    }
}

#[test]
fn test_special_characters_roundtrip() {
    let data: &[&[&str]] = &[
        &["a,b", "c"],
        &["he said \"hi\"", "x"],
        &["multi\nline", "cr\rlf\r\n", "y"],
        &["", "mid", "z"],
    ];

    let text = serialize(&values(data), Delimiter::COMMA);
    let table = parse(&text, &ParseOptions::new());
    assert_eq!(table.rows(), &strings(data)[..]);
}

#[test]
fn test_leading_quote_roundtrip() {
    let tables: &[&[&[&str]]] = &[
        &[&["\""], &["next"]],
        &[&["\",x", "y"]],
        &[&["\"\nz"], &["after"]],
        &[&["\"\"", "\"a\""], &["tail"]],
    ];

    for data in tables {
        let text = serialize(&values(data), Delimiter::COMMA);
        let table = parse(&text, &ParseOptions::new());
        assert_eq!(table.rows(), &strings(data)[..], "text: {:?}", text);
    }
}

#[test]
fn test_into_rows() {
    let table = from_csv(Some("h\n1\n"), true, None);
    assert_eq!(table.into_rows(), strings(&[&["h"], &["1"]]));
}

#[test]
fn test_delimiter_isolation() {
    let rows = values(&[&["a,b", "c"]]);
    assert_eq!(serialize(&rows, Delimiter::COMMA), "\"a,b\",c\n");
}

#[test]
fn test_quote_escaping() {
    let rows = values(&[&["he said \"hi\""]]);
    let text = serialize(&rows, Delimiter::COMMA);
    assert_eq!(text, "\"he said \"\"hi\"\"\"\n");

    let table = parse(&text, &ParseOptions::new());
    assert_eq!(table.rows(), &strings(&[&["he said \"hi\""]])[..]);
}

#[test]
fn test_header_indexing() {
    let table = from_csv(Some("name,age\nAlice,30\nBob,25\n"), true, Some(","));

    assert_eq!(table.headers(), Some(&strings(&[&["name", "age"]])[0][..]));
    assert_eq!(table.column_count(), 2);

    let map = table.data_by_column().unwrap();
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["name", "age"]);
    assert_eq!(map["name"], vec!["Alice", "Bob"]);
    assert_eq!(map["age"], vec!["30", "25"]);
    assert_eq!(table.data_rows().len(), 2);
}

#[test]
fn test_ragged_rows() {
    let table = from_csv(Some("a,b,c\nx,y\n"), false, None);
    assert_eq!(table.rows(), &strings(&[&["a", "b", "c"], &["x", "y"]])[..]);
    assert_eq!(table.column_count(), 3);

    let table = from_csv(Some("a,b,c\nx,y\n"), true, None);
    assert_eq!(table.column("a"), Some(&["x".to_string()][..]));
    assert_eq!(table.column("c"), Some(&["".to_string()][..]));
}

#[test]
fn test_empty_field_positions() {
    let table = from_csv(Some("a,,b\n"), false, None);
    assert_eq!(table.rows(), &strings(&[&["a", "", "b"]])[..]);

    let table = from_csv(Some("a,b,\n"), false, None);
    assert_eq!(table.rows(), &strings(&[&["a", "b"]])[..]);
}

#[test]
fn test_bad_input_tolerance() {
    assert_eq!(to_csv(&Value::Null, Some(",")), "");
    assert_eq!(to_csv(&Value::Bool(true), Some(",")), "");

    let table = from_csv(None, true, Some(","));
    assert!(table.rows().is_empty());
    assert_eq!(table.column_count(), 0);
    assert_eq!(table.headers(), Some(&[][..]));
    assert!(table.data_by_column().unwrap().is_empty());
}

#[test]
fn test_skip_invalid_row_likes() {
    let rows = Value::List(vec![
        Value::from(vec!["a"]),
        Value::Null,
        Value::List(vec![]),
        Value::from("b"),
    ]);
    assert_eq!(to_csv(&rows, Some(",")), "a\nb\n");
}

#[test]
fn test_typed_values() {
    let rows = vec![Value::from(vec![
        Value::Int(-7),
        Value::Float(0.25),
        Value::Float(10.0),
        Value::Bool(false),
        Value::Null,
        Value::from("end"),
    ])];
    let text = serialize(&rows, Delimiter::COMMA);
    assert_eq!(text, "-7,0.25,10,false,,end\n");
}

#[test]
fn test_no_trailing_newline() {
    let table = from_csv(Some("a,b\nc,d,e"), false, None);
    assert_eq!(table.rows(), &strings(&[&["a", "b"], &["c", "d", "e"]])[..]);
    assert_eq!(table.column_count(), 3);
}

#[test]
fn test_crlf_input() {
    let table = from_csv(Some("h1,h2\r\n1,2\r\n"), true, None);
    assert_eq!(table.column("h2"), Some(&["2".to_string()][..]));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_json() {
    let rows: Value = serde_json::from_str(r#"[["a", 1, true], null, [], "b", [1.5, null]]"#).unwrap();
    assert_eq!(to_csv(&rows, None), "a,1,true\nb\n1.5,\n");

    let options: ParseOptions = serde_json::from_str(r#"{"hasHeaders": true, "delimiter": ";;"}"#).unwrap();
    assert!(options.has_headers);
    assert_eq!(options.delimiter, Delimiter::COMMA);

    let table = parse("k,v\n1,2\n", &options);
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["columnCount"], 2);
    assert_eq!(json["dataByColumn"]["k"][0], "1");
}
