use music_time::{Duration, HasDuration, Splittable, Transformable, Voice};

const PRIMES: [u64; 16] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53];

fn prime_tuplets() -> Voice<u64> {
    Voice::from_pairs(PRIMES.iter().map(|p| (Duration::new(1, *p), *p)))
}

#[test]
fn prime_tuplets_sum_exactly() {
    let _ = env_logger::builder().is_test(true).try_init();
    let voice = prime_tuplets();
    let total = voice.duration();
    assert!(total > Duration::one());
    assert!(total > Duration::new(168, 100), "total = {}", total);
    assert!(total < Duration::new(169, 100), "total = {}", total);

    let (head, tail) = voice.split(Duration::new(5, 6));
    assert_eq!(head.values().collect::<Vec<_>>(), vec![&2, &3]);
    assert_eq!(head.duration(), Duration::new(5, 6));
    assert_eq!(&head.duration() + &tail.duration(), total);
}

#[test]
fn tuplet_ratios_are_undone() {
    let voice = prime_tuplets();
    let ratios: Vec<Duration> = PRIMES
        .iter()
        .map(|p| Duration::new(*p as i64, p + 1))
        .collect();
    let squeezed = ratios
        .iter()
        .fold(voice.clone(), |v, r| v.stretch(r.clone()));
    assert!(squeezed.duration() < voice.duration());
    let restored = ratios
        .iter()
        .try_fold(squeezed, |v, r| v.compress(r.clone()))
        .expect("ratios are not zero");
    assert_eq!(restored, voice);
}

#[test]
fn oversized_pairs_fail_to_encode() {
    let total = prime_tuplets().duration();
    assert!(total.to_pair().is_err());
    assert!(serde_json::to_string(&total).is_err());
    let small = Duration::new(5, 6);
    assert_eq!(serde_json::to_string(&small).expect("can encode"), "[5,6]");
}
