// tests/common/mod.rs
//! 共通テストユーティリティ

#![allow(dead_code)]

use std::{fs, path::Path};

use tempfile::TempDir;

pub const BACH_SIMPLE: &str = "I,IV,V,I,vi\nI,ii,V,I,IV\nvi,ii,V,I,I";
pub const BACH_INV: &str = "I(0),IV(0),V(1),I(0),vi(0)\nI(0),ii(1),V(0),I(0),IV(0)";
pub const MONTEVERDI_SIMPLE: &str = "I,V,vi,IV,I\nIV,V,I,vi,V";

/// Dataset directory laid out like the real `datasets/` folder.
pub fn datasets() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "simple-dataset-bach.txt", BACH_SIMPLE);
    write(dir.path(), "inv-dataset-bach.txt", BACH_INV);
    write(dir.path(), "simple-dataset-monteverdi.txt", MONTEVERDI_SIMPLE);
    dir
}

fn write(root: &Path, name: &str, text: &str) {
    fs::write(root.join(name), text).expect("write dataset");
}
