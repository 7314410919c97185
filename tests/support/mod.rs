//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use rental_clean::artifacts::LocalStore;
use tempfile::TempDir;

pub const SAMPLE_HEADER: &str = "id,name,price,longitude,latitude,last_review";

/// Snapshot covering one row per failure mode: price out of range, longitude
/// west of the box, latitude north of it, plus rows sitting exactly on the
/// price bounds and rows with empty or unparsable review dates.
pub fn sample_listings_csv() -> String {
    [
        SAMPLE_HEADER,
        "1,Cozy room,50,-73.9,40.7,2019-05-01",
        "2,Loft,500,-73.9,40.7,2019-04-12",
        "3,Jersey place,50,-75.0,40.7,2019-03-02",
        "4,Upstate cabin,50,-73.9,42.0,2018-11-20",
        "5,Budget bunk,10,-73.95,40.65,",
        "6,Penthouse,100,-73.8,40.8,not a date",
    ]
    .join("\n")
        + "\n"
}

/// Store rooted in a subdirectory of a fresh temp dir; the rest of the dir
/// is free for staging files.
pub fn temp_store() -> (TempDir, LocalStore) {
    let dir = TempDir::new().expect("create temp dir");
    let store = LocalStore::new(dir.path().join("store")).expect("init store");
    (dir, store)
}

pub fn stage_file(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(file_name);
    fs::write(&path, content).expect("write fixture");
    path
}
