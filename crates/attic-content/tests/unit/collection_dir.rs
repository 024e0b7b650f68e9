//! Collections loaded from content directories.

use std::fs;

use attic_content::{Collection, Recipe};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &[u8]) {
    fs::write(dir.path().join(name), contents).unwrap();
}

fn recipe_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "pancakes.md",
        b"---\ntitle: Pancakes\ndate: 2024-02-13\ntags: [Dessert, breakfast]\n---\nFry.",
    );
    write(
        &dir,
        "frangipane.md",
        b"---\ntitle: Frangipane\ndate: 2024-06-01\ntags: [dessert]\n---\nBake.",
    );
    write(&dir, "broken.md", b"---\ntitle: Broken\n\nno closing line");
    write(&dir, "notes.txt", b"not content");
    fs::create_dir(dir.path().join("drafts")).unwrap();
    fs::write(
        dir.path().join("drafts").join("hidden.md"),
        "---\ntitle: Hidden\n---\nx",
    )
    .unwrap();
    dir
}

#[test]
fn test_load_dir_picks_top_level_markdown() {
    let dir = recipe_dir();
    let recipes: Collection<Recipe> = Collection::load_dir(dir.path()).unwrap();
    let slugs: Vec<&str> = recipes.sources().iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs, vec!["broken", "frangipane", "pancakes"]);
}

#[test]
fn test_listing_survives_malformed_file() {
    let dir = recipe_dir();
    let recipes: Collection<Recipe> = Collection::load_dir(dir.path()).unwrap();
    let all = recipes.all();
    assert_eq!(all.len(), 3);
    // The sentinel is dated today, so it sorts ahead of both recipes.
    let slugs: Vec<&str> = all.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["broken", "frangipane", "pancakes"]);
    assert!(all.iter().any(|p| p.title == "Error: Malformed Post (broken)"));

    let malformed = recipes.malformed();
    assert_eq!(malformed.len(), 1);
    assert_eq!(malformed[0].0, "broken");
}

#[test]
fn test_tags_merge_across_files() {
    let dir = recipe_dir();
    let recipes: Collection<Recipe> = Collection::load_dir(dir.path()).unwrap();
    let tags = recipes.tags();
    assert_eq!(tags.len(), 2);
    assert!(tags.iter().any(|t| t.eq_ignore_ascii_case("dessert")));
    assert_eq!(recipes.by_tag("Dessert"), recipes.by_tag("dessert"));
    assert_eq!(recipes.by_tag("DESSERT").len(), 2);
}

#[test]
fn test_invalid_utf8_read_lossily() {
    let dir = TempDir::new().unwrap();
    write(&dir, "latin1.md", b"---\ntitle: Caf\xe9\n---\nBody");
    let recipes: Collection<Recipe> = Collection::load_dir(dir.path()).unwrap();
    let post = recipes.by_slug("latin1").unwrap();
    assert_eq!(post.title, "Caf\u{fffd}");
}

#[test]
fn test_missing_dir_is_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let err = Collection::<Recipe>::load_dir(&missing).unwrap_err();
    assert!(matches!(err, attic_core::Error::Io { .. }));
    assert!(err.to_string().contains("nope"));
}

#[test]
fn test_empty_dir() {
    let dir = TempDir::new().unwrap();
    let recipes: Collection<Recipe> = Collection::load_dir(dir.path()).unwrap();
    assert!(recipes.is_empty());
    assert!(recipes.all().is_empty());
    assert!(recipes.tags().is_empty());
}

// `/proc/self/mem` is a regular file whose first page cannot be read.
#[cfg(target_os = "linux")]
#[test]
fn test_unreadable_file_does_not_hide_siblings() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "good.md",
        b"---\ntitle: Good\ndate: 2024-02-13\ntags: [dinner]\n---\nCook.",
    );
    std::os::unix::fs::symlink("/proc/self/mem", dir.path().join("bad.md")).unwrap();

    let recipes: Collection<Recipe> = Collection::load_dir(dir.path()).unwrap();
    let slugs: Vec<String> = recipes.all().into_iter().map(|p| p.slug).collect();
    assert_eq!(slugs, vec!["good"]);
    assert_eq!(recipes.tags(), vec!["dinner"]);
    assert_eq!(recipes.len(), 2);

    assert_eq!(recipes.unreadable().len(), 1);
    assert_eq!(recipes.unreadable()[0].0, "bad");

    let malformed = recipes.malformed();
    assert_eq!(malformed.len(), 1);
    assert_eq!(malformed[0].0, "bad");
    assert!(matches!(
        malformed[0].1,
        attic_core::Error::MalformedDocument { .. }
    ));
    assert!(malformed[0].1.to_string().contains("bad.md"));
}
