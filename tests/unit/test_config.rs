//! Configuration loading

use idring::{RingBuffer, RingConfig, RingError};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ring.toml");
    fs::write(&path, "capacity = 5\n").unwrap();

    let config = RingConfig::load(&path).unwrap();
    assert_eq!(config.capacity, 5);

    let rb: RingBuffer<u32> = RingBuffer::from_config(&config).unwrap();
    assert_eq!(rb.len(), 5);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = RingConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read ring config"));
}

#[test]
fn test_load_invalid_capacity_mentions_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("zero.toml");
    fs::write(&path, "capacity = 0\n").unwrap();

    let err = RingConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("zero.toml"));
    assert!(err
        .chain()
        .any(|cause| cause.downcast_ref::<RingError>() == Some(&RingError::ZeroCapacity)));
}

#[test]
fn test_from_config_rejects_zero() {
    let result: Result<RingBuffer<u8>, _> = RingBuffer::from_config(&RingConfig::new(0));
    assert_eq!(result.unwrap_err(), RingError::ZeroCapacity);
}
