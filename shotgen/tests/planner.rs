use shotgen::buckets::{BucketConfig, BucketEntry, Buckets};
use shotgen::rng::seeded;
use shotgen::*;
use std::collections::BTreeSet;
use std::time::{Duration, SystemTime};

fn buckets() -> Buckets {
    BucketConfig {
        yard: vec![
            BucketEntry::new(75, 99, 15),
            BucketEntry::new(100, 124, 20),
            BucketEntry::new(125, 149, 20),
            BucketEntry::new(150, 174, 20),
            BucketEntry::new(175, 199, 15),
            BucketEntry::new(200, 250, 10),
        ],
        feet: vec![
            BucketEntry::new(3, 6, 30),
            BucketEntry::new(7, 15, 40),
            BucketEntry::new(16, 25, 20),
            BucketEntry::new(26, 50, 10),
        ],
    }
    .load()
    .unwrap()
}

struct Recorder {
    history: MemoryHistory,
    clock: u64,
}

impl Recorder {
    fn new() -> Self {
        Self {
            history: MemoryHistory::new(),
            clock: 0,
        }
    }

    fn record(&mut self, practice: u64, distance: u32, outcome: Outcome) {
        self.clock += 1;
        self.history.record(Shot {
            practice: PracticeId(practice),
            distance,
            outcome,
            reported_at: SystemTime::UNIX_EPOCH + Duration::from_secs(self.clock),
        });
    }
}

#[test]
fn gated_random_session() {
    let settings = Settings::default();
    let buckets = buckets();
    let clubs = ClubBag::new(vec![95, 130, 160, 205, 240]);

    let mut recorder = Recorder::new();
    recorder.history.add_practice(PracticeId(1), PracticeType::Random);
    for distance in 100..=124 {
        recorder.record(1, distance, Outcome::Hit);
    }

    let planner = Planner::new(&settings, &buckets, &recorder.history, &clubs).unwrap();
    let mut rng = seeded(2024);
    let request = Request::GatedRandom {
        session: Some(PracticeId(1)),
    };

    for _ in 0..50 {
        let round = planner.plan(request, &mut rng).unwrap();
        let targets = round.targets().unwrap();
        assert_eq!(targets.len(), 10);
        // nothing beyond the longest club
        assert!(targets.iter().all(|d| (75..=240).contains(d)));
    }
}

#[test]
fn putting_rounds() {
    let settings = Settings::default();
    let buckets = buckets();
    let history = MemoryHistory::new();
    let clubs = ClubBag::default();
    let planner = Planner::new(&settings, &buckets, &history, &clubs).unwrap();
    let mut rng = seeded(7);

    let round = planner
        .plan(Request::PuttingRandom { session: None }, &mut rng)
        .unwrap();
    let targets = round.targets().unwrap();
    assert_eq!(targets.len(), 10);
    assert!(targets.iter().all(|d| (3..=50).contains(d)));

    let round = planner.plan(Request::StandardPutting, &mut rng).unwrap();
    let targets = round.targets().unwrap();
    assert_eq!(targets.len(), 8);
    assert!(targets.iter().all(|d| (3..=25).contains(d)));
}

#[test]
fn block_and_serial_from_history() {
    let settings = Settings::default();
    let buckets = buckets();
    let clubs = ClubBag::default();

    let mut recorder = Recorder::new();
    recorder.history.add_practice(PracticeId(1), PracticeType::Random);
    recorder.history.add_practice(PracticeId(2), PracticeType::Warmup);

    // reliable short irons, a shaky middle
    for _ in 0..10 {
        recorder.record(1, 110, Outcome::Hit);
    }
    for i in 0..10 {
        let outcome = if i % 2 == 0 { Outcome::Miss } else { Outcome::Hit };
        recorder.record(1, 160, outcome);
    }
    // warmup shots are not graded
    for _ in 0..10 {
        recorder.record(2, 80, Outcome::Miss);
    }

    let planner = Planner::new(&settings, &buckets, &recorder.history, &clubs).unwrap();
    let mut rng = seeded(1);

    let block = planner.plan(Request::Block, &mut rng).unwrap();
    assert_eq!(block, Round::Targets(vec![162; 10]));

    let serial = planner.plan(Request::Serial, &mut rng).unwrap();
    assert_eq!(
        serial,
        Round::Targets(vec![150, 150, 150, 162, 162, 162, 162, 174, 174, 174])
    );
}

#[test]
fn custom_rounds() {
    let settings = Settings::builder().pick_count(6).build().unwrap();
    let buckets = buckets();
    let history = MemoryHistory::new();
    let clubs = ClubBag::default();
    let planner = Planner::new(&settings, &buckets, &history, &clubs).unwrap();
    let mut rng = seeded(5);

    let round = planner
        .plan(Request::Custom { min: 140, max: 180 }, &mut rng)
        .unwrap();
    let targets: BTreeSet<u32> = round.targets().unwrap().iter().copied().collect();
    assert_eq!(targets.len(), 6);
    assert!(targets.iter().all(|d| (140..=180).contains(d)));

    let round = planner
        .plan(Request::CustomPutting { min: 8, max: 8 }, &mut rng)
        .unwrap();
    assert_eq!(round, Round::Targets(vec![8; 6]));
}

#[test]
fn same_seed_same_round() {
    let settings = Settings::default();
    let buckets = buckets();
    let history = MemoryHistory::new();
    let clubs = ClubBag::new(vec![100, 150, 200]);
    let planner = Planner::new(&settings, &buckets, &history, &clubs).unwrap();

    for request in [
        Request::GatedRandom { session: None },
        Request::StandardPutting,
        Request::Chip,
    ] {
        let a = planner.plan(request, &mut seeded(31)).unwrap();
        let b = planner.plan(request, &mut seeded(31)).unwrap();
        assert_eq!(a, b);
    }
}

#[cfg(feature = "serde-serialize")]
#[test]
fn settings_from_json() {
    let settings: Settings = serde_json::from_str(
        r#"{
            "pick_count": 12,
            "putting_cutoff": 15,
            "chip_range": { "start": 5, "end": 20 }
        }"#,
    )
    .unwrap();

    assert_eq!(settings.validate(), Ok(()));
    assert_eq!(settings.pick_count, 12);
    assert_eq!(settings.putting_cutoff, 15);
    assert_eq!(settings.chip_range, 5..20);
    assert_eq!(settings.pitch_range, 25..75);

    let settings: Settings = serde_json::from_str(r#"{ "block_miss_rate": 2.0 }"#).unwrap();
    assert_eq!(settings.validate(), Err(Error::InvalidMissRate(2.0)));

    let settings: Settings =
        serde_json::from_str(r#"{ "putting_bonus": 4294967295 }"#).unwrap();
    assert_eq!(settings.validate(), Err(Error::InvalidBonus(u32::MAX)));
}
