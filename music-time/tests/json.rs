use music_time::{Duration, Note, Reactive, Span, Tagged, Time, Voice};
use serde_json::json;

#[test]
fn duration_and_time() {
    let duration = Duration::new(-3, 4);
    let encoded = serde_json::to_value(&duration).expect("can encode");
    assert_eq!(encoded, json!([-3, 4]));
    let decoded: Duration = serde_json::from_value(encoded).expect("can decode");
    assert_eq!(decoded, duration);

    let time = Time::new(7, 8);
    let encoded = serde_json::to_string(&time).expect("can encode");
    assert_eq!(encoded, "[7,8]");
    assert_eq!(serde_json::from_str::<Time>(&encoded).expect("can decode"), time);

    // not reduced on input, reduced after decoding
    let decoded: Duration = serde_json::from_str("[2,4]").expect("can decode");
    assert_eq!(decoded, Duration::new(1, 2));
    assert!(serde_json::from_str::<Duration>("[1,0]").is_err());
}

#[test]
fn span() {
    let span = Span::from_onset_offset(Time::new(1, 2), Time::from_integer(3));
    let encoded = serde_json::to_value(&span).expect("can encode");
    assert_eq!(encoded, json!({"onset": [1, 2], "offset": [3, 1]}));
    let decoded: Span = serde_json::from_value(encoded).expect("can decode");
    assert_eq!(decoded, span);

    let backward = Span::from_onset_offset(Time::from_integer(3), Time::origin());
    let text = serde_json::to_string(&backward).expect("can encode");
    assert_eq!(serde_json::from_str::<Span>(&text).expect("can decode"), backward);
}

#[test]
fn note() {
    let note = Note::new(Duration::new(3, 8), 60);
    let encoded = serde_json::to_value(&note).expect("can encode");
    assert_eq!(encoded, json!({"duration": [3, 8], "value": 60}));
    let decoded: Note<i32> = serde_json::from_value(encoded).expect("can decode");
    assert_eq!(decoded, note);
}

#[test]
fn containers() {
    let voice = Voice::from_pairs([
        (Duration::new(1, 4), Tagged::new("vn".to_string(), 60)),
        (Duration::new(1, 2), Tagged::new("va".to_string(), 55)),
    ]);
    let text = serde_json::to_string(&voice).expect("can encode");
    let decoded: Voice<Tagged<String, i32>> = serde_json::from_str(&text).expect("can decode");
    assert_eq!(decoded, voice);

    // changes are normalized on decoding
    let reactive: Reactive<i32> = serde_json::from_value(json!({
        "initial": 0,
        "changes": [[[3, 1], 2], [[1, 1], 5]],
    }))
    .expect("can decode");
    assert_eq!(reactive, Reactive::new(0, vec![(Time::from_integer(1), 5), (Time::from_integer(3), 2)]));
}
