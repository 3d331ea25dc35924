use serde::{Deserialize, Serialize};
use serde_ltsv::{
    from_reader, from_str, from_str_with_options, record, to_string, to_string_with_options,
    to_writer, Error, Reader, ReaderOptions, Record, Writer, WriterOptions,
};
use std::collections::HashMap;

const JAPANESE_FOOD: &str = "
hoge:foo\tbar:baz
perl:5.17.8\truby:2.0\tpython:2.6
sushi:寿司\ttennpura:天ぷら\tramen:ラーメン\tgyoza:餃子
\t\t";

fn expected_food() -> Vec<Record> {
    vec![
        record!({ "hoge": "foo", "bar": "baz" }),
        record!({ "perl": "5.17.8", "ruby": "2.0", "python": "2.6" }),
        record!({ "sushi": "寿司", "tennpura": "天ぷら", "ramen": "ラーメン", "gyoza": "餃子" }),
    ]
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
enum Method {
    Get,
    Post,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct AccessLog {
    host: String,
    method: Method,
    path: String,
    status: u16,
    size: Option<u64>,
    reqtime: f64,
}

fn sample_logs() -> Vec<AccessLog> {
    vec![
        AccessLog {
            host: "127.0.0.1".to_string(),
            method: Method::Get,
            path: "/index.html".to_string(),
            status: 200,
            size: Some(2326),
            reqtime: 0.012,
        },
        AccessLog {
            host: "10.0.0.7".to_string(),
            method: Method::Post,
            path: "/api/v1/items?page=2".to_string(),
            status: 201,
            size: None,
            reqtime: 1.5,
        },
    ]
}

#[test]
fn test_read_one_by_one() {
    let mut reader = Reader::with_options(JAPANESE_FOOD.as_bytes(), ReaderOptions::lenient());
    let mut n = 0;
    while let Some(record) = reader.read_record().unwrap() {
        assert!(!record.is_empty());
        n += 1;
    }
    assert_eq!(n, 3);
}

#[test]
fn test_read_all_lenient() {
    let records: Vec<Record> =
        from_str_with_options(JAPANESE_FOOD, ReaderOptions::lenient()).unwrap();
    assert_eq!(records, expected_food());
}

#[test]
fn test_read_all_enforced_rejects_mixed_shapes() {
    let err = from_str::<Record>(JAPANESE_FOOD).unwrap_err();
    match err {
        Error::LabelName { line, label } => {
            assert_eq!(line, 3);
            assert!(label == "perl" || label == "ruby" || label == "python");
        }
        other => panic!("Expected LabelName, got {other:?}"),
    }
}

#[test]
fn test_write_then_read_each_record() {
    for (record, options) in [
        (record!({ "hoge": "foo" }), WriterOptions::new()),
        (record!({ "hoge": "foo" }), WriterOptions::crlf()),
        (
            record!({ "perl": "5.17.8", "ruby": "2.0", "python": "3.3.0" }),
            WriterOptions::new(),
        ),
        (
            record!({ "sushi": "寿司", "tennpura": "天ぷら", "ramen": "ラーメン", "gyoza": "餃子" }),
            WriterOptions::crlf(),
        ),
    ] {
        let mut writer = Writer::with_options(Vec::new(), options);
        writer.write_record(&record).unwrap();
        let bytes = writer.into_inner().unwrap();

        let mut reader = Reader::new(bytes.as_slice());
        assert_eq!(reader.read_record().unwrap(), Some(record));
        assert_eq!(reader.read_record().unwrap(), None);
    }
}

#[test]
fn test_write_all_then_read_all() {
    let records = expected_food();
    let mut writer = Writer::new(Vec::new());
    writer.write_all(&records).unwrap();
    let bytes = writer.into_inner().unwrap();

    let back: Vec<Record> = Reader::with_options(bytes.as_slice(), ReaderOptions::lenient())
        .read_all()
        .unwrap();
    assert_eq!(back, records);
}

#[test]
fn test_mixed_terminators_in_one_stream() {
    let mut buffer = Vec::new();
    {
        let mut writer = Writer::new(&mut buffer);
        writer.write_record(&record!({ "a": 1 })).unwrap();
        writer.flush().unwrap();
    }
    {
        let mut writer = Writer::with_options(&mut buffer, WriterOptions::crlf());
        writer.write_record(&record!({ "a": 2 })).unwrap();
        writer.flush().unwrap();
    }
    assert_eq!(buffer, b"a:1\na:2\r\n");

    let records: Vec<Record> = from_reader(buffer.as_slice()).unwrap();
    assert_eq!(records, vec![record!({ "a": 1 }), record!({ "a": 2 })]);
}

#[test]
fn test_typed_access_log_roundtrip() {
    let logs = sample_logs();
    let ltsv = to_string(&logs).unwrap();

    assert!(ltsv.starts_with("host:127.0.0.1\tmethod:GET\tpath:/index.html\tstatus:200"));
    assert!(ltsv.lines().nth(1).unwrap().contains("\tsize:\t"));

    let back: Vec<AccessLog> = from_str(&ltsv).unwrap();
    assert_eq!(back, logs);
}

#[test]
fn test_typed_stream_starting_with_none_keeps_label_set() {
    let mut logs = sample_logs();
    logs.reverse();
    let ltsv = to_string(&logs).unwrap();
    assert!(ltsv.lines().next().unwrap().contains("\tsize:\t"));

    let back: Vec<AccessLog> = from_str(&ltsv).unwrap();
    assert_eq!(back, logs);
}

#[test]
fn test_typed_reader_and_writer() {
    let mut buffer = Vec::new();
    let mut writer = Writer::new(&mut buffer);
    for log in sample_logs() {
        writer.serialize(&log).unwrap();
    }
    writer.flush().unwrap();
    drop(writer);

    let mut reader = Reader::new(buffer.as_slice());
    let first: AccessLog = reader.deserialize().unwrap().unwrap();
    assert_eq!(first.method, Method::Get);
    let second: AccessLog = reader.deserialize().unwrap().unwrap();
    assert_eq!(second.size, None);
    assert!(reader.deserialize::<AccessLog>().unwrap().is_none());
}

#[test]
fn test_typed_conversion_error() {
    let input = "host:a\tmethod:GET\tpath:/\tstatus:ok\treqtime:0.1\n";
    match from_str::<AccessLog>(input) {
        Err(Error::InvalidValue { label, .. }) => assert_eq!(label, "status"),
        other => panic!("Expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_unknown_enum_variant() {
    let input = "host:a\tmethod:DELETE\tpath:/\tstatus:200\treqtime:0.1\n";
    assert!(from_str::<AccessLog>(input).is_err());
}

#[test]
fn test_hashmap_records() {
    let records: Vec<HashMap<String, String>> = from_str("a:1\tb:2\nb:3\n").unwrap();
    assert_eq!(records[0]["a"], "1");
    assert_eq!(records[1]["b"], "3");
    assert!(!records[1].contains_key("a"));

    let ltsv = to_string(&records[1..]).unwrap();
    assert_eq!(ltsv, "b:3\n");
}

#[test]
fn test_to_writer_and_crlf_string() {
    let records = vec![record!({ "level": "info", "msg": "started" })];
    let mut buffer = Vec::new();
    to_writer(&mut buffer, &records).unwrap();
    assert_eq!(buffer, b"level:info\tmsg:started\n");

    let crlf = to_string_with_options(&records, WriterOptions::crlf()).unwrap();
    assert_eq!(crlf, "level:info\tmsg:started\r\n");
}

#[test]
fn test_reader_exposes_schema() {
    let mut reader = Reader::new("b:1\ta:2\na:3\n".as_bytes());
    assert!(reader.schema().is_enforced());
    reader.read_all().unwrap();
    let labels: Vec<&str> = reader
        .schema()
        .labels()
        .unwrap()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(labels, vec!["b", "a"]);
    assert_eq!(reader.line(), 2);
}

#[test]
fn test_record_serializes_to_json() {
    let record = record!({ "host": "127.0.0.1", "status": 200 });
    let json = serde_json::to_string(&record).unwrap();
    assert_eq!(json, r#"{"host":"127.0.0.1","status":"200"}"#);

    let back: Record = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
