/// Builds a [`Record`](crate::Record) from `label: value` pairs.
///
/// Values can be any expression implementing `ToString`.
///
/// ```rust
/// use serde_ltsv::record;
///
/// let record = record!({ "host": "127.0.0.1", "status": 200, "cached": false });
/// assert_eq!(record.get("status"), Some("200"));
/// assert_eq!(record.get("cached"), Some("false"));
/// ```
#[macro_export]
macro_rules! record {
    // Handle empty record
    ({}) => {
        $crate::Record::new()
    };

    ({ $($label:literal : $value:expr),* $(,)? }) => {{
        let mut record = $crate::Record::new();
        $(
            record.insert($label, ::std::string::ToString::to_string(&$value));
        )*
        record
    }};
}
