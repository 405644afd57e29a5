use std::path::{Path, PathBuf};

use assert_cmd::Command;
use hound::{SampleFormat, WavSpec, WavWriter};
use predicates::prelude::*;

fn write_wav(path: &Path, bits: u16, frames: u32) {
    let spec = WavSpec {
        channels: 1,
        sample_rate: 1_000,
        bits_per_sample: bits,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec).unwrap();
    for frame in 0..frames {
        if bits == 16 {
            writer.write_sample(frame as i16).unwrap();
        } else {
            writer.write_sample(frame as i32).unwrap();
        }
    }
    writer.finalize().unwrap();
}

fn write_markers(path: &Path, points: &[(u64, &str)]) {
    let markers = points
        .iter()
        .map(|(sample, section)| serde_json::json!({ "sample": sample, "section": section }))
        .collect::<Vec<_>>();
    let payload = serde_json::json!({ "markers": markers });
    std::fs::write(path, payload.to_string()).unwrap();
}

fn fixture(dir: &Path, points: &[(u64, &str)]) -> PathBuf {
    let wav = dir.join("set.wav");
    write_wav(&wav, 16, 500);
    write_markers(&dir.join("set.json"), points);
    wav
}

const FIVE_MARKERS: &[(u64, &str)] = &[
    (0, "intro"),
    (100, "A"),
    (200, "B"),
    (300, "C"),
    (400, "outro"),
];

fn segue() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("segue"))
}

#[test]
fn missing_audio_exits_with_code_one() {
    let dir = tempfile::tempdir().unwrap();
    segue()
        .arg(dir.path().join("absent.wav"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("audio file not found"));
}

#[test]
fn missing_marker_file_exits_with_code_two() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("lonely.wav");
    write_wav(&wav, 16, 500);
    segue()
        .arg(&wav)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("matching marker file not found"));
}

#[test]
fn dry_run_plays_intro_body_and_outro() {
    let dir = tempfile::tempdir().unwrap();
    let wav = fixture(dir.path(), FIVE_MARKERS);
    segue()
        .arg(&wav)
        .args(["--dry-run", "--length-frames", "250", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Playing first section: intro, sample: 0"))
        .stdout(predicate::str::contains("round 2"))
        .stdout(predicate::str::contains("Playing last section: outro, sample: 400"))
        .stdout(predicate::str::contains("Mix finished: 2 body round(s), 400 frames"));
}

#[test]
fn dry_run_with_crossfade_frames() {
    let dir = tempfile::tempdir().unwrap();
    let wav = fixture(dir.path(), FIVE_MARKERS);
    segue()
        .arg(&wav)
        .args([
            "--dry-run",
            "--length-frames",
            "250",
            "--crossfade",
            "--crossfade-frames",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(195 frames)"))
        .stdout(predicate::str::contains("Mix finished: 2 body round(s), 495 frames"));
}

#[test]
fn single_interior_marker_fails_with_guidance() {
    let dir = tempfile::tempdir().unwrap();
    let wav = fixture(
        dir.path(),
        &[(0, "intro"), (100, "A"), (200, "B"), (400, "outro")],
    );
    segue()
        .arg(&wav)
        .args(["--dry-run", "--length-frames", "250"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 interior markers"));
}

#[test]
fn oversized_crossfade_names_the_segment() {
    let dir = tempfile::tempdir().unwrap();
    let wav = fixture(dir.path(), FIVE_MARKERS);
    segue()
        .arg(&wav)
        .args(["--dry-run", "--length-frames", "250", "-x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too short for a 10000 frame crossfade"));
}

#[test]
fn explicit_marker_path_overrides_companion() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("take.wav");
    write_wav(&wav, 16, 500);
    let markers = dir.path().join("cues.json");
    write_markers(&markers, FIVE_MARKERS);
    segue()
        .arg(&wav)
        .arg("--markers")
        .arg(&markers)
        .args(["--dry-run", "--quiet", "--length-frames", "100"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn duplicate_offsets_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let wav = fixture(
        dir.path(),
        &[(0, "intro"), (100, "A"), (100, "B"), (400, "outro")],
    );
    segue()
        .arg(&wav)
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate marker offset 100"));
}

#[test]
fn wide_samples_are_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let wav = dir.path().join("wide.wav");
    write_wav(&wav, 24, 500);
    write_markers(&dir.path().join("wide.json"), FIVE_MARKERS);
    segue()
        .arg(&wav)
        .arg("--dry-run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unreadable audio"));
}

#[test]
fn inspect_lists_interior_pool() {
    let dir = tempfile::tempdir().unwrap();
    let wav = fixture(dir.path(), FIVE_MARKERS);
    segue()
        .arg("inspect")
        .arg(&wav)
        .assert()
        .success()
        .stdout(predicate::str::contains("sample rate: 1000 Hz"))
        .stdout(predicate::str::contains("Interior pool (2): A, B"));
}
