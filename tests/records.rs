use dex_dashboard_wasm::domain::{
    chart::{format_series, series_from_json},
    errors::AppError,
    records::{NumericField, RecordId, RecordSet, parse_float},
};
use insta::assert_json_snapshot;
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn record_set_keeps_provider_key_order() {
    let json = r#"{
        "0xccc": { "stakedAmount": "1" },
        "0xaaa": { "stakedAmount": 2 },
        "0xbbb": { "stakedAmount": null }
    }"#;
    let records = RecordSet::from_json(json).unwrap();
    let ids: Vec<&str> = records.ids().map(RecordId::value).collect();
    assert_eq!(ids, vec!["0xccc", "0xaaa", "0xbbb"]);

    let staked = |id: &str| records.get(&RecordId::from(id)).unwrap().staked_amount.value();
    assert_eq!(staked("0xccc"), 1.0);
    assert_eq!(staked("0xaaa"), 2.0);
    assert!(staked("0xbbb").is_nan());
}

#[wasm_bindgen_test(unsupported = test)]
fn malformed_record_names_its_id() {
    let json = r#"{ "0xbad": { "stakablePair": 7 } }"#;
    match RecordSet::from_json(json) {
        Err(AppError::ValidationError(message)) => assert!(message.contains("0xbad")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[wasm_bindgen_test(unsupported = test)]
fn insert_replaces_in_place() {
    let mut records = RecordSet::from_json(r#"{ "a": {}, "b": {} }"#).unwrap();
    let mut replacement = records.get(&RecordId::from("a")).cloned().unwrap();
    replacement.staked_amount = NumericField::from(9.0);
    records.insert(RecordId::from("a"), replacement);

    let ids: Vec<&str> = records.ids().map(RecordId::value).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(records.get(&RecordId::from("a")).unwrap().staked_amount.value(), 9.0);
}

#[wasm_bindgen_test(unsupported = test)]
fn collected_duplicates_keep_first_position() {
    let staked = |v: f64| dex_dashboard_wasm::domain::records::Record {
        staked_amount: NumericField::from(v),
        ..Default::default()
    };
    let records: RecordSet = (0..5_000)
        .map(|i| (RecordId::new(format!("0x{:04}", i)), staked(f64::from(i))))
        .chain([(RecordId::from("0x0000"), staked(-1.0))])
        .collect();

    assert_eq!(records.len(), 5_000);
    assert_eq!(records.ids().next().map(RecordId::value), Some("0x0000"));
    assert_eq!(records.get(&RecordId::from("0x0000")).unwrap().staked_amount.value(), -1.0);
    assert_eq!(records.get(&RecordId::from("0x4999")).unwrap().staked_amount.value(), 4999.0);
}

#[wasm_bindgen_test(unsupported = test)]
fn numeric_prefix_parsing() {
    assert_eq!(parse_float("12.5"), 12.5);
    assert_eq!(parse_float("  3e2"), 300.0);
    assert_eq!(parse_float("7.25abc"), 7.25);
    assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    assert!(parse_float("abc").is_nan());
    assert!(parse_float("").is_nan());
}

#[wasm_bindgen_test(unsupported = test)]
fn series_points_skip_missing_values() {
    let json = r#"[
        { "date": 1617580800, "dailyVolumeUSD": "2.5", "totalLiquidityUSD": 10 },
        { "date": 1617667200, "dailyVolumeUSD": null },
        { "date": 1617753600, "dailyVolumeUSD": 4.5 }
    ]"#;
    let series = series_from_json(json).unwrap();
    assert_eq!(series.len(), 3);
    assert_json_snapshot!(format_series(&series, "dailyVolumeUSD"), @r###"
    [
      {
        "time": "2021-04-05",
        "value": 2.5
      },
      {
        "time": "2021-04-07",
        "value": 4.5
      }
    ]
    "###);
}
