use inmem_1brc::{generator, Config, LoadMode, NumberMode, ProcessingError};
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_input(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

fn render_file(file: &NamedTempFile, config: &Config) -> String {
    let summary = inmem_1brc::process_file(file.path(), config).unwrap();
    String::from_utf8(summary.render()).unwrap()
}

#[test]
fn test_file_roundtrip_in_both_load_modes() {
    let file = write_input(b"Paris;25.3\n");
    for mode in [LoadMode::Read, LoadMode::Mmap] {
        let config = Config::single_threaded().with_load_mode(mode);
        assert_eq!(render_file(&file, &config), "{Paris=25.3/25.3/25.3}");
    }
}

#[test]
fn test_sorted_case_insensitive() {
    let file = write_input(b"zurich;1.0\nAbha;-2.5\nberlin;3.0\nAbha;7.5\n");
    assert_eq!(
        render_file(&file, &Config::single_threaded()),
        "{Abha=-2.5/2.5/7.5, berlin=3.0/3.0/3.0, zurich=1.0/1.0/1.0}"
    );
}

#[test]
fn test_empty_file() {
    let file = write_input(b"");
    for mode in [LoadMode::Read, LoadMode::Mmap] {
        let config = Config::default().with_load_mode(mode);
        assert_eq!(render_file(&file, &config), "{}");
    }
}

#[test]
fn test_missing_file_fails_before_scanning() {
    let dir = tempfile::tempdir().unwrap();
    let err = inmem_1brc::process_file(dir.path().join("nope.txt"), &Config::default())
        .unwrap_err();
    assert!(matches!(err, ProcessingError::Io { .. }));
}

#[test]
fn test_generated_data_invariants() {
    let mut data = Vec::new();
    generator::generate(&mut data, 20_000, 11).unwrap();

    let summary = inmem_1brc::process(&data, &Config::single_threaded()).unwrap();
    assert_eq!(summary.report.records, 20_000);
    assert_eq!(summary.report.dropped(), 0);

    let total: u64 = summary.table.iter().map(|(_, stats)| stats.count).sum();
    assert_eq!(total, 20_000);
    for (name, stats) in summary.table.iter() {
        assert!(generator::STATIONS.iter().any(|s| s.as_bytes() == &name[..]));
        assert!(stats.count > 0);
        assert!(stats.min <= stats.mean() && stats.mean() <= stats.max);
    }
}

#[test]
fn test_output_independent_of_worker_count() {
    let mut data = Vec::new();
    generator::generate(&mut data, 50_000, 3).unwrap();

    let expected = inmem_1brc::process(&data, &Config::single_threaded())
        .unwrap()
        .render();
    for workers in [2, 3, 7, 16] {
        let summary = inmem_1brc::process(&data, &Config::default().with_workers(workers)).unwrap();
        assert_eq!(
            String::from_utf8(summary.render()).unwrap(),
            String::from_utf8(expected.clone()).unwrap(),
            "workers = {workers}"
        );
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let file = write_input(b"b;1.0\na;2.0\nB;3.0\nA;4.0\nb;-5.0\n");
    let config = Config::default().with_workers(2);
    let first = render_file(&file, &config);
    assert_eq!(first, "{A=4.0/4.0/4.0, a=2.0/2.0/2.0, B=3.0/3.0/3.0, b=-5.0/-2.0/1.0}");
    for _ in 0..5 {
        assert_eq!(render_file(&file, &config), first);
    }
}

#[test]
fn test_validated_mode_drops_malformed_records() {
    let file = write_input(b"Paris;10.0\nParis;hot\nNoSemicolonHere\nParis;20.0\n");
    let config = Config::single_threaded().with_number_mode(NumberMode::Validated);
    let summary = inmem_1brc::process_file(file.path(), &config).unwrap();
    assert_eq!(
        String::from_utf8(summary.render()).unwrap(),
        "{Paris=10.0/15.0/20.0}"
    );
    assert_eq!(summary.report.malformed_number, 1);
    assert_eq!(summary.report.missing_delimiter, 1);
}

#[test]
fn test_strict_mode_aborts() {
    let file = write_input(b"Paris;10.0\nParis;1e3\n");
    let config = Config::single_threaded()
        .with_number_mode(NumberMode::Validated)
        .with_strict(true);
    let err = inmem_1brc::process_file(file.path(), &config).unwrap_err();
    assert!(err.to_string().contains("offset 11"));
}
