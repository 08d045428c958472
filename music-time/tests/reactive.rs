use music_time::{
    Duration, HasDuration, Note, Reactive, Span, Time, TimeError, Transformable, Voice,
};

fn t(n: i64) -> Time {
    Time::from_integer(n)
}

#[test]
fn step_function_to_voice() {
    let _ = env_logger::builder().is_test(true).try_init();
    let steps = Reactive::new(0, vec![(t(1), 5), (t(3), 2)]);
    let voice = steps
        .to_voice(Span::from_onset_offset(t(0), t(3)))
        .expect("window is forward");
    assert_eq!(
        voice.notes(),
        &[
            Note::new(Duration::from_integer(1), 0),
            Note::new(Duration::from_integer(2), 5)
        ]
    );
}

#[test]
fn voice_reactive_voice() {
    let voice = Voice::from_pairs([
        (Duration::new(1, 4), 'a'),
        (Duration::new(3, 8), 'b'),
        (Duration::new(1, 8), 'c'),
        (Duration::one(), 'a'),
    ]);
    let origin = Time::new(3, 2);
    let reactive = voice.to_reactive(origin.clone()).expect("voice is not empty");
    let window = Span::from_onset_duration(origin, voice.duration());
    assert_eq!(reactive.to_voice(window), Ok(voice));
}

#[test]
fn transformed_steps_sample_the_same() {
    let steps = Reactive::new("pp", vec![(t(1), "mf"), (t(2), "ff")]);
    let window = Span::from_onset_offset(t(0), t(3));
    let span = Span::from_onset_duration(t(10), Duration::from_integer(2));
    let moved = steps.clone().transform(&span);
    let before = steps.to_voice(window.clone()).expect("forward window");
    let after = moved
        .to_voice(window.transform(&span))
        .expect("forward window");
    assert_eq!(after, before.stretch(Duration::from_integer(2)));
}

#[test]
fn backward_window_fails() {
    let steps = Reactive::constant(1);
    let window = Span::from_onset_offset(t(2), t(1));
    assert_eq!(steps.to_voice(window.clone()), Err(TimeError::NotForward(window)));
}
