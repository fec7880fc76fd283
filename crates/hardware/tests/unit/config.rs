//! Configuration loading unit tests.

use std::io::Write;

use ppcmmu_core::config::{Config, ConfigError};
use ppcmmu_core::core::arch::{PrivilegeMode, SegmentRegister};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

#[test]
fn empty_object_gives_defaults() {
    let config = Config::from_json("{}").expect("defaults are valid");
    assert_eq!(config, Config::default());
    assert_eq!(config.memory.ram_base, 0);
    assert_eq!(config.memory.ram_size, 16 * 1024 * 1024);
    assert!(!config.general.trace);
}

#[test]
fn full_machine_description() {
    let json = r#"{
        "general": { "trace": true },
        "memory": { "ram_base": 0, "ram_size": 33554432 },
        "mmu": {
            "msr": 16432,
            "sr": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 2147483663],
            "sdr1": 1048576
        }
    }"#;
    let config = Config::from_json(json).expect("valid config");

    assert!(config.general.trace);
    assert_eq!(config.memory.ram_size, 32 * 1024 * 1024);
    assert_eq!(config.mmu.privilege(), PrivilegeMode::User);
    assert_eq!(config.mmu.sr[3], SegmentRegister::with_vsid(3));
    assert!(config.mmu.sr[15].is_direct_store());
    assert_eq!(config.mmu.htab_origin(), 0x0010_0000);
}

#[test]
fn malformed_json_is_parse_error() {
    assert!(matches!(Config::from_json("{ not json"), Err(ConfigError::Parse(_))));
    assert!(matches!(
        Config::from_json(r#"{ "memory": { "ram_size": -1 } }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn validation() {
    let zero = Config::from_json(r#"{ "memory": { "ram_size": 0 } }"#);
    assert!(matches!(zero, Err(ConfigError::Invalid(_))));

    let overflow = Config::from_json(r#"{ "memory": { "ram_base": 4293918720, "ram_size": 2097152 } }"#);
    assert!(matches!(overflow, Err(ConfigError::Invalid(_))));

    let huge = Config::from_json(r#"{ "memory": { "ram_size": 4294967295 } }"#);
    assert!(matches!(huge, Err(ConfigError::Invalid(msg)) if msg.contains("limit")));

    let largest = Config::from_json(r#"{ "memory": { "ram_size": 1073741824 } }"#);
    assert!(largest.is_ok());

    let top = Config::from_json(r#"{ "memory": { "ram_base": 4293918720, "ram_size": 1048576 } }"#);
    assert!(top.is_ok());
}

#[test]
fn from_file_round() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, r#"{{ "memory": {{ "ram_size": 65536 }} }}"#).expect("write config");

    let config = Config::from_file(file.path()).expect("readable config");
    assert_eq!(config.memory.ram_size, 0x1_0000);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
    assert!(err.to_string().starts_with("cannot read config"));
}
