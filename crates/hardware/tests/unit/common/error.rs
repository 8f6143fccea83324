//! Error Message Tests.
//!
//! Errors must name the level and the field at fault so a bad configuration
//! can be diagnosed from the message alone.

use cachesim_core::common::{ConfigError, SimError, TraceError};

#[test]
fn not_power_of_two_names_level_and_field() {
    let e = ConfigError::NotPowerOfTwo {
        level: "L2".into(),
        field: "size",
        value: 1000,
    };
    assert_eq!(e.to_string(), "level `L2`: size = 1000 is not a power of two");
}

#[test]
fn unknown_kind_names_value() {
    let e = ConfigError::UnknownKind {
        level: "L1".into(),
        value: "3-way".into(),
    };
    let msg = e.to_string();
    assert!(msg.contains("`L1`"));
    assert!(msg.contains("`3-way`"));
}

#[test]
fn invalid_associativity_message() {
    let e = ConfigError::InvalidAssociativity {
        level: "L3".into(),
        ways: 3,
        blocks: 16,
    };
    assert_eq!(
        e.to_string(),
        "level `L3`: 3 ways cannot evenly partition 16 blocks"
    );
}

#[test]
fn too_many_blocks_message() {
    let e = ConfigError::TooManyBlocks {
        level: "L1".into(),
        blocks: 1 << 40,
        max: 1 << 24,
    };
    assert_eq!(
        e.to_string(),
        "level `L1`: 1099511627776 blocks exceeds the limit of 16777216 blocks per level"
    );
}

#[test]
fn trace_errors_carry_line_numbers() {
    assert_eq!(
        TraceError::MissingField { line: 7 }.to_string(),
        "trace line 7: expected `<access-type> <hex-address>`"
    );
    assert!(
        TraceError::BadAddress {
            line: 3,
            value: "zz".into()
        }
        .to_string()
        .starts_with("trace line 3:")
    );
}

#[test]
fn sim_error_is_transparent() {
    let e: SimError = ConfigError::EmptyHierarchy.into();
    assert_eq!(e.to_string(), ConfigError::EmptyHierarchy.to_string());
    let e: SimError = TraceError::MissingField { line: 1 }.into();
    assert!(matches!(e, SimError::Trace(TraceError::MissingField { line: 1 })));
}
