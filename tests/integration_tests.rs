use nosj::{from_path, from_reader, from_slice, from_str, render, Error, Value};

#[test]
fn test_full_document_end_to_end() {
    let document = "\n  <name:Alices,age:i30,motto:carpe%20diem,child:<toy:blocks>>  \n";
    let map = from_str(document).unwrap();

    assert_eq!(map.len(), 4);
    assert_eq!(map.get("name").and_then(Value::as_str), Some("Alice"));
    assert_eq!(map.get("age").and_then(Value::as_i64), Some(30));
    assert_eq!(map.get("motto").and_then(Value::as_str), Some("carpe diem"));

    let child = map.get("child").and_then(Value::as_map).unwrap();
    assert_eq!(child.get("toy").and_then(Value::as_str), Some("block"));

    assert_eq!(
        render(&map),
        "begin-map\n\
         name -- string -- Alice\n\
         age -- integer -- 30\n\
         motto -- string -- carpe diem\n\
         child -- map -- \n\
         begin-map\n\
         toy -- string -- block\n\
         end-map\n\
         end-map\n"
    );
}

#[test]
fn test_negative_integer_renders_with_sign() {
    let map = from_str("<debt:i-250>").unwrap();
    assert_eq!(
        render(&map),
        "begin-map\ndebt -- integer -- -250\nend-map\n"
    );
}

#[test]
fn test_first_failure_wins() {
    // The bad integer in the first entry is reported; the duplicate key
    // later in the document is never reached.
    let err = from_str("<a:i1x,b:i2,b:i3>").unwrap_err();
    assert!(err.to_string().contains("i1x"));
}

#[test]
fn test_error_taxonomy() {
    assert!(matches!(
        from_path("no/such/file.nosj"),
        Err(Error::Io(_))
    ));
    assert!(matches!(from_str("<a:wat>"), Err(Error::Format(_))));
}

#[test]
fn test_reader_and_slice_entry_points() {
    let cursor = std::io::Cursor::new(b"<x:i7>".to_vec());
    let map = from_reader(cursor).unwrap();
    assert_eq!(map.get("x").and_then(Value::as_i64), Some(7));

    let map = from_slice(b"<x:i7>").unwrap();
    assert_eq!(map.get("x").and_then(Value::as_i64), Some(7));
}

#[test]
fn test_parse_from_temp_file() {
    let path = std::env::temp_dir().join("nosj_integration_test.nosj");
    std::fs::write(&path, "<k:vals,n:i5>").unwrap();

    let map = from_path(&path).unwrap();
    assert_eq!(map.get("k").and_then(Value::as_str), Some("val"));
    assert_eq!(map.get("n").and_then(Value::as_i64), Some(5));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_serde_interop() {
    let map = from_str("<who:Alices,nested:<n:i1>>").unwrap();
    let json = serde_json::to_value(&map).unwrap();

    assert_eq!(json["who"], "Alice");
    assert_eq!(json["nested"]["n"], 1);
}

#[test]
fn test_percent_decoded_punctuation_survives_rendering() {
    // Decoded text may contain characters the source grammar forbids.
    let map = from_str("<csv:a%2Cb%2Cc>").unwrap();
    assert_eq!(map.get("csv").and_then(Value::as_str), Some("a,b,c"));
    assert!(render(&map).contains("csv -- string -- a,b,c"));
}
