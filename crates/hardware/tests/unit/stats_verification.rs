//! # Report Verification
//!
//! Checks derived rates and the JSON shape of the final report.

use cachesim_core::stats::{LevelStats, SimulationReport};
use pretty_assertions::assert_eq;
use serde_json::json;

fn level(name: &str, hits: u64, misses: u64) -> LevelStats {
    LevelStats {
        name: name.into(),
        hits,
        misses,
    }
}

#[test]
fn visits_and_hit_rate() {
    let l = level("L1", 3, 1);
    assert_eq!(l.visits(), 4);
    assert!((l.hit_rate() - 0.75).abs() < f64::EPSILON);
}

#[test]
fn unvisited_level_has_zero_hit_rate() {
    assert!(level("L3", 0, 0).hit_rate().abs() < f64::EPSILON);
}

#[test]
fn json_shape_matches_report_format() {
    let report = SimulationReport {
        caches: vec![level("L1", 3, 2), level("L2", 1, 1)],
        main_memory_accesses: 1,
    };
    let value = serde_json::to_value(&report).expect("serializable");
    assert_eq!(
        value,
        json!({
            "caches": [
                { "name": "L1", "hits": 3, "misses": 2 },
                { "name": "L2", "hits": 1, "misses": 1 }
            ],
            "main_memory_accesses": 1
        })
    );
}

#[test]
fn pretty_json_is_indented() {
    let report = SimulationReport {
        caches: vec![level("L1", 0, 1)],
        main_memory_accesses: 1,
    };
    let text = report.to_json_pretty().expect("serializable");
    assert!(text.contains("\n  \"caches\": ["));
    assert!(text.contains("\"main_memory_accesses\": 1"));
}

#[test]
fn summary_table_lists_every_level() {
    let report = SimulationReport {
        caches: vec![level("L1", 3, 2), level("L2", 1, 1)],
        main_memory_accesses: 1,
    };
    assert_eq!(report.accesses(), 5);
    let text = report.to_string();
    assert!(text.contains("accesses                 5"));
    assert!(text.contains("L1"));
    assert!(text.contains("(60.00% hit)"));
    assert!(text.contains("(50.00% hit)"));
    assert!(text.ends_with("main_memory_accesses     1"));
}
