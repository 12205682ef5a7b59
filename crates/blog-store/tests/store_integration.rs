//! Integration tests for PostStore.
//!
//! These tests verify that the data file is read and written correctly and
//! that listings read through the store see the file's current contents.

use std::fs;

use blog_store_rs::{list_posts, BlogData, ListOptions, PostRepository, PostStore};
use tempfile::tempdir;

#[test]
fn test_save_and_load_roundtrip() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("posts.json");
    let store = PostStore::with_path(&path);

    let data = BlogData::sample();
    store.save(&data).expect("failed to save data");
    assert!(path.exists(), "data file should exist after save");

    let loaded = store.load().expect("failed to load data");
    assert_eq!(loaded, data);
}

#[test]
fn test_file_uses_camel_case_fields() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("posts.json");
    PostStore::with_path(&path)
        .save(&BlogData::sample())
        .expect("failed to save data");

    let raw = fs::read_to_string(&path).expect("failed to read file");
    assert!(raw.contains("\"fechaCreacion\""));
    assert!(raw.contains("\"postId\""));
    assert!(!raw.contains("fecha_creacion"));
}

#[test]
fn test_load_missing_file_returns_error() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = PostStore::with_path(temp_dir.path().join("nonexistent.json"));

    let err = store.load().expect_err("load should fail for missing file");
    assert!(
        err.to_string().contains("failed to read data file"),
        "error should be I/O related: {}",
        err
    );
}

#[test]
fn test_listing_sees_updates_between_calls() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = PostStore::with_path(temp_dir.path().join("posts.json"));
    let opts = ListOptions {
        q: Some("estado:publicado".to_string()),
        ..ListOptions::default()
    };

    assert_eq!(list_posts(&store, &opts).unwrap().meta.total, 0);

    let mut data = BlogData::sample();
    store.save(&data).unwrap();
    assert_eq!(list_posts(&store, &opts).unwrap().meta.total, 1);

    data.posts[0].estado = "borrador".to_string();
    store.save(&data).unwrap();
    assert_eq!(list_posts(&store, &opts).unwrap().meta.total, 0);
}

#[test]
fn test_store_repository_comments_and_categories() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = PostStore::with_path(temp_dir.path().join("posts.json"));
    let data = BlogData::sample();
    store.save(&data).unwrap();

    let comments = store.comments_for(&data.posts[0].id).unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].autor, "Usuario Anónimo");

    let names: Vec<String> = store
        .categories()
        .unwrap()
        .into_iter()
        .map(|c| c.nombre)
        .collect();
    assert_eq!(names, vec!["Tecnología", "Lifestyle"]);
}
