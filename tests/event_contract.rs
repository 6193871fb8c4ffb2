use fxpulse_core::{
    aggregate_by_date, transform, ChartDataPoint, Currency, MetricField, RawEvent, Score,
    TransformedEvent, Weight,
};
use fxpulse_tests::raw_event;

#[test]
fn test_raw_event_round_trips_the_feed_shape() {
    let event = raw_event(
        "evt-1", Currency::Gbp, "Retail Sales", "2024-01-05", "09:00", "0.3%", "0.4%", "0.2%",
    );

    let json = serde_json::to_value(&event).expect("serialize");
    assert_eq!(json["id"], "evt-1");
    assert_eq!(json["currency"], "GBP");
    assert_eq!(json["country"], "United Kingdom");
    assert_eq!(json["title"], "Retail Sales");
    assert_eq!(json["date"], "2024-01-05");
    assert_eq!(json["time"], "09:00");
    assert_eq!(json["impact"], "Medium");
    assert_eq!(json["previous"], "0.3%");

    let back: RawEvent = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, event);
}

#[test]
fn test_unknown_currency_is_rejected_at_decode_time() {
    let payload = r#"{
        "id": "evt-1",
        "country": "Australia",
        "currency": "AUD",
        "title": "CPI",
        "date": "2024-01-05",
        "time": "08:30",
        "impact": "High",
        "previous": "2.0",
        "forecast": "2.1",
        "actual": "2.3"
    }"#;

    assert!(serde_json::from_str::<RawEvent>(payload).is_err());
}

#[test]
fn test_malformed_date_and_time_are_rejected_at_decode_time() {
    let mut value = serde_json::to_value(raw_event(
        "evt-1", Currency::Usd, "CPI", "2024-01-05", "08:30", "2.0", "2.1", "2.3",
    ))
    .expect("serialize");

    value["date"] = serde_json::Value::String("05/01/2024".to_owned());
    assert!(serde_json::from_value::<RawEvent>(value.clone()).is_err());

    value["date"] = serde_json::Value::String("2024-01-05".to_owned());
    value["time"] = serde_json::Value::String("8.30am".to_owned());
    assert!(serde_json::from_value::<RawEvent>(value).is_err());
}

#[test]
fn test_transformed_event_serializes_camel_case_keys() {
    let event = raw_event(
        "evt-1", Currency::Usd, "CPI", "2024-01-05", "08:30", "2.0", "2.1", "2.3",
    );
    let scored = transform(&event, Weight::new(3).expect("valid weight"));

    let json = serde_json::to_value(&scored).expect("serialize");
    assert_eq!(json["eventType"], "CPI");
    assert_eq!(json["weightedScore"], 6);
    assert_eq!(json["timestamp"], "2024-01-05T08:30:00");
    assert_eq!(json["previous"], 2.0);
    assert_eq!(json["score"], 2);
    assert_eq!(json["weight"], 3);
    assert!(json.get("event_type").is_none());
}

#[test]
fn test_transformed_event_round_trips() {
    let event = raw_event(
        "evt-1", Currency::Eur, "GDP", "2024-01-06", "10:00", "1.0", "1.1", "0.9",
    );
    let scored = transform(&event, Weight::default());

    let json = serde_json::to_string(&scored).expect("serialize");
    let back: TransformedEvent = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, scored);
}

#[test]
fn test_out_of_range_weight_fails_to_decode() {
    let event = raw_event(
        "evt-1", Currency::Usd, "CPI", "2024-01-05", "08:30", "2.0", "2.1", "2.3",
    );
    let mut json = serde_json::to_value(transform(&event, Weight::default())).expect("serialize");

    json["weight"] = serde_json::Value::from(11);
    assert!(serde_json::from_value::<TransformedEvent>(json).is_err());
}

#[test]
fn test_zero_score_fails_to_decode() {
    let event = raw_event(
        "evt-1", Currency::Usd, "CPI", "2024-01-05", "08:30", "2.0", "2.1", "2.3",
    );
    let mut json = serde_json::to_value(transform(&event, Weight::default())).expect("serialize");

    json["score"] = serde_json::Value::from(0);
    let err = serde_json::from_value::<TransformedEvent>(json).expect_err("zero score");
    assert!(err.to_string().contains("score"));
}

#[test]
fn test_score_serializes_as_signed_number() {
    assert_eq!(serde_json::to_string(&Score::MissedBoth).expect("serialize"), "-2");
    assert_eq!(serde_json::to_string(&Score::BeatBoth).expect("serialize"), "2");
    assert_eq!(serde_json::from_str::<Score>("-1").expect("deserialize"), Score::BeatForecastOnly);
}

#[test]
fn test_chart_row_flattens_currency_columns_next_to_the_date() {
    let events = vec![
        transform(
            &raw_event("a", Currency::Usd, "CPI", "2024-01-05", "08:30", "2.0", "2.1", "2.3"),
            Weight::default(),
        ),
        transform(
            &raw_event("b", Currency::Chf, "CPI", "2024-01-05", "09:00", "2.0", "2.1", "1.9"),
            Weight::default(),
        ),
    ];

    let points = aggregate_by_date(&events, MetricField::WeightedScore);
    let json = serde_json::to_value(&points).expect("serialize");

    assert_eq!(json[0]["date"], "2024-01-05");
    assert_eq!(json[0]["USD"], 2.0);
    assert_eq!(json[0]["CHF"], -2.0);
    assert!(json[0].get("EUR").is_none());
}

#[test]
fn test_chart_row_round_trips() {
    let events = vec![transform(
        &raw_event("a", Currency::Jpy, "GDP", "2024-01-05", "08:30", "2.0", "2.1", "2.3"),
        Weight::default(),
    )];
    let points = aggregate_by_date(&events, MetricField::WeightedScore);

    let json = serde_json::to_string(&points).expect("serialize");
    let back: Vec<ChartDataPoint> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, points);
}

#[test]
fn test_metric_field_uses_camel_case_column_names() {
    assert_eq!(MetricField::WeightedScore.as_str(), "weightedScore");
    let field: MetricField = serde_json::from_str("\"weightedScore\"").expect("deserialize");
    assert_eq!(field, MetricField::WeightedScore);
    assert_eq!(
        serde_json::to_string(&MetricField::Previous).expect("serialize"),
        "\"previous\""
    );
}
