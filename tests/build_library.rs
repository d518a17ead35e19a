//! End-to-end runs of the indexer against temporary library trees.
//!
//! Each test lays out a project root (`library/` plus optional
//! `library.json` / `library.toml`), runs the pipeline through the public
//! API and inspects the manifest that lands on disk.

use library_indexer::config::{self, IndexerConfig, Layout};
use library_indexer::index::{self, Paths};
use library_indexer::types::{Collection, Manifest};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "fake image").unwrap();
}

fn project(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for rel in files {
        touch(tmp.path(), &format!("library/{rel}"));
    }
    tmp
}

fn build(root: &Path) -> Manifest {
    let config = config::load_config(root).unwrap();
    let paths = Paths::resolve(root, &config);
    index::run(&paths, &config).unwrap();
    read_manifest(&paths.output)
}

fn read_manifest(path: &Path) -> Manifest {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn find<'a>(manifest: &'a Manifest, artist: &str, year: u32, arc: u32) -> &'a Collection {
    manifest
        .collections
        .iter()
        .find(|c| c.artist == artist && c.year == year && c.arc == arc)
        .unwrap_or_else(|| panic!("no collection for {artist}/{year}/Arc{arc}"))
}

#[test]
fn text_files_excluded_from_images() {
    let tmp = project(&["2023/Arc1/ArtistX/a.png", "2023/Arc1/ArtistX/b.txt"]);

    let manifest = build(tmp.path());

    assert_eq!(manifest.collections.len(), 1);
    let c = &manifest.collections[0];
    assert_eq!(c.artist, "ArtistX");
    assert_eq!((c.year, c.arc), (2023, 1));
    assert_eq!(c.images, vec!["library/2023/Arc1/ArtistX/a.png"]);
}

#[test]
fn non_year_folder_excluded() {
    let tmp = project(&["abc/Arc1/ArtistX/a.png", "2023/Arc1/ArtistY/a.png"]);

    let manifest = build(tmp.path());

    assert_eq!(manifest.collections.len(), 1);
    assert_eq!(manifest.collections[0].artist, "ArtistY");
    assert!(
        manifest
            .collections
            .iter()
            .flat_map(|c| &c.images)
            .all(|p| !p.contains("/abc/"))
    );
}

#[test]
fn artist_without_images_produces_nothing() {
    let tmp = project(&["2023/Arc1/ArtistX/notes.txt", "2023/Arc1/ArtistX/raw.psd"]);

    let manifest = build(tmp.path());
    assert!(manifest.collections.is_empty());
}

#[test]
fn every_collection_has_images() {
    let tmp = project(&[
        "2023/Arc1/A/a.png",
        "2023/Arc1/B/readme.md",
        "2023/Arc2/C/x.svg",
        "2022/Arc1/D/y.GIF",
        "2022/Arc3/E/z.doc",
    ]);

    let manifest = build(tmp.path());

    assert_eq!(manifest.collections.len(), 3);
    assert!(manifest.collections.iter().all(|c| !c.images.is_empty()));
}

#[test]
fn missing_library_writes_empty_manifest() {
    let tmp = TempDir::new().unwrap();

    let manifest = build(tmp.path());

    assert!(manifest.collections.is_empty());
    let content = fs::read_to_string(tmp.path().join("library.json")).unwrap();
    assert_eq!(content, "{\n  \"collections\": []\n}");
}

#[test]
fn ordering_is_year_desc_then_arc_asc() {
    let tmp = project(&[
        "2021/Arc2/A/a.png",
        "2023/Arc10/B/a.png",
        "2023/Arc2/C/a.png",
        "2021/Arc1/D/a.png",
        "2024/Arc3/E/a.png",
    ]);

    let manifest = build(tmp.path());

    for pair in manifest.collections.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.year > b.year || (a.year == b.year && a.arc <= b.arc));
    }
    let artists: Vec<&str> = manifest.collections.iter().map(|c| c.artist.as_str()).collect();
    assert_eq!(artists, vec!["E", "C", "B", "D", "A"]);
}

#[test]
fn edited_title_survives_rebuild() {
    let tmp = project(&["2023/Arc1/ArtistX/a.png", "2023/Arc1/ArtistY/a.png"]);
    let output = tmp.path().join("library.json");

    let mut manifest = build(tmp.path());
    assert_eq!(find(&manifest, "ArtistX", 2023, 1).name, "Untitled");

    for c in &mut manifest.collections {
        if c.artist == "ArtistX" {
            c.name = "My Art".to_string();
        }
    }
    fs::write(&output, serde_json::to_string_pretty(&manifest).unwrap()).unwrap();

    let rebuilt = build(tmp.path());
    assert_eq!(find(&rebuilt, "ArtistX", 2023, 1).name, "My Art");
    assert_eq!(find(&rebuilt, "ArtistY", 2023, 1).name, "Untitled");
}

#[test]
fn prior_title_keyed_by_artist_year_arc() {
    let tmp = project(&["2023/Arc1/ArtistX/a.png", "2023/Arc2/ArtistX/b.png"]);
    fs::write(
        tmp.path().join("library.json"),
        r#"{"collections": [{"name": "My Art", "artist": "ArtistX", "year": 2023, "arc": 1, "images": []}]}"#,
    )
    .unwrap();

    let manifest = build(tmp.path());

    assert_eq!(find(&manifest, "ArtistX", 2023, 1).name, "My Art");
    assert_eq!(find(&manifest, "ArtistX", 2023, 2).name, "Untitled");
}

#[test]
fn rebuild_without_changes_is_identical() {
    let tmp = project(&[
        "2023/Arc1/ArtistX/a.png",
        "2023/Arc1/ArtistX/b.jpg",
        "2022/Arc4/ArtistY/c.svg",
    ]);
    let output = tmp.path().join("library.json");

    build(tmp.path());
    let first = fs::read_to_string(&output).unwrap();
    build(tmp.path());
    let second = fs::read_to_string(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn malformed_manifest_is_replaced() {
    let tmp = project(&["2023/Arc1/ArtistX/a.png"]);
    fs::write(tmp.path().join("library.json"), "<<not json>>").unwrap();

    let manifest = build(tmp.path());

    assert_eq!(manifest.collections.len(), 1);
    assert_eq!(manifest.collections[0].name, "Untitled");
}

#[test]
fn collection_layout_from_config_file() {
    let tmp = project(&[
        "2023/Arc1/ArtistX/Sketches/a.png",
        "2023/Arc1/ArtistX/Empty/notes.txt",
    ]);
    fs::write(
        tmp.path().join("library.toml"),
        "layout = \"collection\"\noutput = \"public/library.json\"\n",
    )
    .unwrap();

    let manifest = build(tmp.path());

    assert_eq!(manifest.collections.len(), 1);
    assert_eq!(manifest.collections[0].name, "Sketches");
    assert_eq!(
        manifest.collections[0].images,
        vec!["library/2023/Arc1/ArtistX/Sketches/a.png"]
    );
    assert!(tmp.path().join("public/library.json").exists());
}

#[test]
fn collection_layout_title_survives_edit() {
    let tmp = project(&[
        "2023/Arc1/ArtistX/Sketches/a.png",
        "2023/Arc1/ArtistX/Paintings/a.png",
    ]);
    let config = IndexerConfig {
        layout: Layout::Collection,
        ..Default::default()
    };
    let paths = Paths::resolve(tmp.path(), &config);

    let mut manifest = index::run(&paths, &config).unwrap();
    let sketches = manifest
        .collections
        .iter_mut()
        .find(|c| c.name == "Sketches")
        .unwrap();
    sketches.name = "Pencil Work".to_string();
    index::write_manifest(&paths.output, &manifest).unwrap();

    let rebuilt = index::run(&paths, &config).unwrap();
    let names: Vec<&str> = rebuilt.collections.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Paintings", "Pencil Work"]);
}

#[test]
fn malformed_entry_keeps_other_titles() {
    let tmp = project(&["2023/Arc1/ArtistX/a.png", "2023/Arc2/ArtistY/a.png"]);
    fs::write(
        tmp.path().join("library.json"),
        r#"{"collections": [
            {"name": "My Art", "artist": "ArtistX", "year": 2023, "arc": 1,
             "images": ["library/2023/Arc1/ArtistX/a.png"]},
            {"name": "Half Written", "artist": "ArtistY"}
        ]}"#,
    )
    .unwrap();

    let manifest = build(tmp.path());

    assert_eq!(find(&manifest, "ArtistX", 2023, 1).name, "My Art");
    assert_eq!(find(&manifest, "ArtistY", 2023, 2).name, "Untitled");
}

#[test]
fn absolute_library_in_config_is_refused() {
    let tmp = project(&["2023/Arc1/ArtistX/a.png"]);
    let library = tmp.path().join("library");
    fs::write(
        tmp.path().join("library.toml"),
        format!("library = {:?}\n", library.to_string_lossy()),
    )
    .unwrap();

    let result = config::load_config(tmp.path());

    assert!(matches!(result, Err(config::ConfigError::Validation(_))));
    assert!(!tmp.path().join("library.json").exists());
}
