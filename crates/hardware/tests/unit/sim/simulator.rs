//! Simulator Facade Tests.
//!
//! End-to-end runs from a JSON configuration and a text trace to the final
//! report, through both the in-memory API and files on disk.

use cachesim_core::common::{ConfigError, SimError, TraceError};
use cachesim_core::config::HierarchyConfig;
use cachesim_core::sim::{Simulator, simulate_files};
use cachesim_core::stats::{LevelStats, SimulationReport};
use pretty_assertions::assert_eq;

use crate::common::harness::{TWO_LEVEL_JSON, init_tracing, temp_file};

const TRACE: &str = "R 0x00\nR 0x40\nW 0x00\nR 0x40\nR 0x40\n";

fn expected_report() -> SimulationReport {
    SimulationReport {
        caches: vec![
            LevelStats {
                name: "L1".into(),
                hits: 1,
                misses: 4,
            },
            LevelStats {
                name: "L2".into(),
                hits: 2,
                misses: 2,
            },
        ],
        main_memory_accesses: 2,
    }
}

#[test]
fn in_memory_run() {
    init_tracing();
    let config = HierarchyConfig::from_json_str(TWO_LEVEL_JSON).expect("valid json");
    let mut sim = Simulator::new(&config).expect("valid hierarchy");
    assert_eq!(sim.run([0x00, 0x40, 0x00, 0x40, 0x40]), 5);
    assert_eq!(sim.report(), expected_report());
}

#[test]
fn file_run_matches_in_memory_run() {
    let config = temp_file(TWO_LEVEL_JSON);
    let trace = temp_file(TRACE);
    let report = simulate_files(config.path(), trace.path()).expect("successful run");
    assert_eq!(report, expected_report());
}

#[test]
fn invalid_config_aborts_before_reading_trace() {
    let config = temp_file(r#"{ "caches": [ { "name": "L1", "size": 96, "line_size": 16, "kind": "direct" } ] }"#);
    let dir = tempfile::tempdir().expect("temp dir");
    let err = simulate_files(config.path(), dir.path().join("absent.trace"))
        .expect_err("config must be rejected");
    assert!(matches!(
        err,
        SimError::Config(ConfigError::NotPowerOfTwo { field: "size", value: 96, .. })
    ));
}

#[test]
fn malformed_trace_is_reported() {
    let config = temp_file(TWO_LEVEL_JSON);
    let trace = temp_file("R 0x00\nW nothex\n");
    let err = simulate_files(config.path(), trace.path()).expect_err("trace must be rejected");
    assert!(matches!(
        err,
        SimError::Trace(TraceError::BadAddress { line: 2, .. })
    ));
}

#[test]
fn empty_config_file_is_rejected() {
    let config = temp_file(r#"{ "caches": [] }"#);
    let trace = temp_file(TRACE);
    assert!(matches!(
        simulate_files(config.path(), trace.path()),
        Err(SimError::Config(ConfigError::EmptyHierarchy))
    ));
}
