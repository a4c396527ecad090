//! Integration tests for ingesting feed items into the episode store.

#![allow(clippy::expect_used, reason = "Test failure should panic with context")]

use std::fs;
use std::path::Path;

use gagmap_core::{BuildOptions, RawEpisode};
use gagmap_store::{EpisodeStore, IngestOptions, IngestReport, ingest, read_raw_items};
use gagmap_temporal::{Mode, TemporalExtractor};

fn raw(id: u32, title: &str, description: &str) -> RawEpisode {
    RawEpisode {
        episode: id,
        title: title.to_string(),
        pub_date: "Wed, 29 May 2024 07:00:00 +0000".to_string(),
        description: description.to_string(),
        content_encoded: format!("<a href=\"https://gadg.fm/{}\">vorher</a>", id.saturating_sub(1)),
        duration_in_seconds: 3_000,
        audio_url: format!("https://audio.example/{id}.mp3"),
    }
}

fn feed() -> Vec<RawEpisode> {
    vec![
        raw(10, "GAG10: Die Pest", "Die Pest im 14. Jahrhundert."),
        raw(11, "GAG11: Caesar", "Am 15. März 44 vdZw wird Caesar ermordet."),
        raw(12, "FGAG3: Feedback", "Eure Post."),
        raw(13, "GAG13: Die Zwanziger", "Die 1920er Jahre in Berlin."),
    ]
}

fn extractor() -> TemporalExtractor {
    TemporalExtractor::new().expect("german registry should compile")
}

fn sequential() -> IngestOptions {
    IngestOptions {
        parallel: false,
        ..IngestOptions::default()
    }
}

fn write_items(path: &Path, items: &[RawEpisode]) {
    let lines: Vec<String> = items
        .iter()
        .map(|item| serde_json::to_string(item).expect("item serializes"))
        .collect();
    fs::write(path, lines.join("\n")).expect("items written");
}

#[test]
fn test_first_run_adds_episodes_and_skips_feedback() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = EpisodeStore::open(dir.path().join("episodes.jsonl")).expect("store opens");

    let report = ingest(&mut store, &feed(), &extractor(), &sequential());
    assert_eq!(
        report,
        IngestReport {
            added: 3,
            skipped: 1,
            ..IngestReport::default()
        }
    );

    let caesar = store.get(11).expect("episode 11 stored");
    assert_eq!(caesar.title, "Caesar");
    assert_eq!(caesar.episode_links, vec![10]);
    assert_eq!(caesar.temporal_links.len(), 1);
    assert_eq!(caesar.temporal_links[0].mode(), Mode::Day);
    assert!(caesar.temporal_links[0].is_bce());
    assert!(store.get(12).is_none());
}

#[test]
fn test_second_run_only_rebuilds_changed_items() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = EpisodeStore::open(dir.path().join("episodes.jsonl")).expect("store opens");
    let extractor = extractor();
    ingest(&mut store, &feed(), &extractor, &sequential());

    let mut items = feed();
    items[0].description = "Die Pest im 14. Jahrhundert und im Jahr 1348.".to_string();
    items.push(raw(14, "GAG14: Neu", "Ohne Datum."));

    let report = ingest(&mut store, &items, &extractor, &sequential());
    assert_eq!(
        report,
        IngestReport {
            added: 1,
            updated: 1,
            unchanged: 2,
            skipped: 1,
            failed: 0,
        }
    );
    assert_eq!(store.get(10).expect("episode 10").temporal_links.len(), 2);
}

#[test]
fn test_repeated_id_in_one_batch_keeps_last_item() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = EpisodeStore::open(dir.path().join("episodes.jsonl")).expect("store opens");

    let items = vec![
        raw(30, "GAG30: Entwurf", "Jahr 1700"),
        raw(30, "GAG30: Endfassung", "Jahr 1800"),
    ];
    let report = ingest(&mut store, &items, &extractor(), &sequential());
    assert_eq!(
        report,
        IngestReport {
            added: 1,
            skipped: 1,
            ..IngestReport::default()
        }
    );

    let stored = store.get(30).expect("episode 30 stored");
    assert_eq!(stored.title, "Endfassung");
    assert_eq!(stored.checksum, items[1].checksum());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_failing_item_does_not_stop_others() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = EpisodeStore::open(dir.path().join("episodes.jsonl")).expect("store opens");

    let mut items = feed();
    items[1].description = "Am 30. Februar 1700 geschah nichts.".to_string();
    let mut broken_date = raw(20, "GAG20: Kaputt", "Jahr 1900");
    broken_date.pub_date = "gestern".to_string();
    items.push(broken_date);

    let report = ingest(&mut store, &items, &extractor(), &IngestOptions::default());
    assert_eq!(report.added, 2);
    assert_eq!(report.failed, 2);
    assert!(store.get(11).is_none());
    assert!(store.get(20).is_none());
}

#[test]
fn test_lenient_build_keeps_episode() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = EpisodeStore::open(dir.path().join("episodes.jsonl")).expect("store opens");

    let items = vec![raw(30, "GAG30: Schaltjahr", "Am 30. Februar 1700 und im Jahr 1700.")];
    let options = IngestOptions {
        build: BuildOptions {
            strict: false,
            ..BuildOptions::default()
        },
        ..sequential()
    };

    let report = ingest(&mut store, &items, &extractor(), &options);
    assert_eq!(report.added, 1);
    let episode = store.get(30).expect("episode 30 stored");
    assert_eq!(episode.temporal_links.len(), 1);
    assert_eq!(episode.temporal_links[0].literal(), "Jahr 1700");
}

#[test]
fn test_parallel_and_sequential_agree() {
    let extractor = extractor();
    let items: Vec<RawEpisode> = (1..=60)
        .map(|id| {
            raw(
                id,
                &format!("GAG{id:02}: Folge {id}"),
                &format!("Im {}. Jahrhundert vdZw und im Jahr {id}.", id % 30 + 1),
            )
        })
        .collect();

    let dir = tempfile::tempdir().expect("tempdir");
    let mut sequential_store =
        EpisodeStore::open(dir.path().join("a.jsonl")).expect("store opens");
    let mut parallel_store = EpisodeStore::open(dir.path().join("b.jsonl")).expect("store opens");

    let a = ingest(&mut sequential_store, &items, &extractor, &sequential());
    let b = ingest(&mut parallel_store, &items, &extractor, &IngestOptions::default());

    assert_eq!(a, b);
    assert!(
        sequential_store
            .episodes()
            .zip(parallel_store.episodes())
            .all(|(x, y)| x == y)
    );
}

#[test]
fn test_dump_and_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("episodes.jsonl");
    let mut store = EpisodeStore::open(&path).expect("store opens");
    ingest(&mut store, &feed(), &extractor(), &sequential());
    store.dump().expect("dump succeeds");

    let content = fs::read_to_string(&path).expect("dump readable");
    let ids: Vec<u64> = content
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).expect("line is json");
            value["id"].as_u64().expect("id is a number")
        })
        .collect();
    assert_eq!(ids, vec![13, 11, 10]);

    let mut reloaded = EpisodeStore::open(&path).expect("store reopens");
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded.get(11), store.get(11));

    let report = ingest(&mut reloaded, &feed(), &extractor(), &sequential());
    assert_eq!(report.unchanged, 3);
}

#[test]
fn test_read_raw_items() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("items.jsonl");
    write_items(&path, &feed());

    let items = read_raw_items(&path).expect("items parse");
    assert_eq!(items, feed());
}
