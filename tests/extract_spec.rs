mod common;

use std::fs;
use std::path::Path;

use common::{group, ContainerBuilder, PNG_BYTES};
use sdts_reader::extract::driver::{classify, InputKind};
use sdts_reader::extract::output::{group_dir_name, GroupDirs};
use sdts_reader::sdts::codec::crypto::decrypt_with_password;
use sdts_reader::{
    extract, sniff_extension, EntryCatalog, ErrorPolicy, ExtractConfig, ExtractError, SdtsError,
    UNKNOWN_EXTENSION,
};

fn write(path: &Path, data: &[u8]) {
    fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
    fs::write(path, data).expect("write input");
}

fn png_resource() -> Vec<u8> {
    let mut data = PNG_BYTES.to_vec();
    data.extend_from_slice(b"arbitrary trailing payload");
    data
}

#[test]
fn inputs_are_classified_by_name() {
    assert_eq!(classify(Path::new("game/data.dts")), Some(InputKind::Container));
    assert_eq!(classify(Path::new("game/Audio/bgm.srk")), Some(InputKind::Blob));
    assert_eq!(classify(Path::new("game/other.dts")), None);
    assert_eq!(classify(Path::new("game/readme.txt")), None);
}

#[test]
fn container_resources_land_in_entry_group_index_layout() {
    let root = tempfile::tempdir().expect("root");
    let out = tempfile::tempdir().expect("out");
    let resource = png_resource();

    let builder = ContainerBuilder::new().entry(vec![group("Group1", &[&resource])]);
    write(&root.path().join("data.dts"), &builder.build());
    write(&root.path().join("notes.txt"), b"ignored");

    let config = ExtractConfig::new(root.path(), out.path()).with_catalog(builder.catalog());
    let summary = extract::run(&config).expect("run");

    assert_eq!(summary.containers, 1);
    assert_eq!(summary.resources, 1);
    assert_eq!(summary.blobs, 0);
    let written = fs::read(out.path().join("Entry1/Group1/0000.png")).expect("output file");
    assert_eq!(written, resource);
}

#[test]
fn encrypted_container_uses_configured_password() {
    let root = tempfile::tempdir().expect("root");
    let out = tempfile::tempdir().expect("out");

    let builder = ContainerBuilder::new()
        .encrypted("secret")
        .entry(vec![group("Faces", &[PNG_BYTES, b"not an image"])])
        .entry(vec![group("Maps", &[PNG_BYTES])]);
    write(&root.path().join("game/data.dts"), &builder.build());

    let config = ExtractConfig::new(root.path(), out.path())
        .with_catalog(builder.catalog())
        .with_password(Some("secret".to_string()))
        .with_jobs(2);
    let summary = extract::run(&config).expect("run");

    assert_eq!(summary.resources, 3);
    assert_eq!(
        fs::read(out.path().join("Entry1/Faces/0000.png")).expect("face png"),
        PNG_BYTES
    );
    assert_eq!(
        fs::read(out.path().join("Entry1/Faces/0001.unknown")).expect("face unknown"),
        b"not an image"
    );
    assert!(out.path().join("Entry2/Maps/0000.png").is_file());
}

#[test]
fn default_catalog_names_become_nested_directories() {
    let root = tempfile::tempdir().expect("root");
    let out = tempfile::tempdir().expect("out");

    let mut builder = ContainerBuilder::new().entry(vec![group("Town", &[PNG_BYTES])]);
    for _ in 1..EntryCatalog::default().len() {
        builder = builder.empty_entry();
    }
    write(&root.path().join("data.dts"), &builder.build());

    let summary = extract::run(&ExtractConfig::new(root.path(), out.path())).expect("run");
    assert_eq!(summary.resources, 1);
    assert!(out.path().join("Graphics/mapchip/Town/0000.png").is_file());
}

#[test]
fn srk_blob_mirrors_relative_directory() {
    let root = tempfile::tempdir().expect("root");
    let out = tempfile::tempdir().expect("out");

    let cipher = decrypt_with_password(PNG_BYTES, "secret");
    write(&root.path().join("Material/title.srk"), &cipher);

    let config = ExtractConfig::new(root.path(), out.path()).with_password(Some("secret".into()));
    let summary = extract::run(&config).expect("run");

    assert_eq!(summary.blobs, 1);
    let written = fs::read(out.path().join("Material/title.png")).expect("decrypted blob");
    assert_eq!(written, PNG_BYTES);
}

#[test]
fn srk_blob_with_wrong_password_is_still_written() {
    let root = tempfile::tempdir().expect("root");
    let out = tempfile::tempdir().expect("out");

    let cipher = decrypt_with_password(PNG_BYTES, "secret");
    write(&root.path().join("title.srk"), &cipher);

    let config = ExtractConfig::new(root.path(), out.path()).with_password(Some("wrong".into()));
    let summary = extract::run(&config).expect("run");
    assert_eq!(summary.blobs, 1);

    let garbage = decrypt_with_password(&cipher, "wrong");
    assert_eq!(sniff_extension(&garbage), UNKNOWN_EXTENSION);
    let written = fs::read(out.path().join("title.unknown")).expect("blob output");
    assert_eq!(written, garbage);
    assert!(!out.path().join("title.png").exists());
}

#[test]
fn abort_policy_stops_at_first_bad_file() {
    let root = tempfile::tempdir().expect("root");
    let out = tempfile::tempdir().expect("out");

    write(&root.path().join("a/data.dts"), b"NOPE this is not a container");
    write(&root.path().join("b/later.srk"), &decrypt_with_password(PNG_BYTES, "key"));

    let err = extract::run(&ExtractConfig::new(root.path(), out.path())).unwrap_err();
    match err {
        ExtractError::File { path, source } => {
            assert!(path.ends_with("a/data.dts"), "path {}", path.display());
            assert!(matches!(source, SdtsError::InvalidSignature), "got {:?}", source);
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(!out.path().join("b/later.png").exists());
}

#[test]
fn skip_policy_continues_past_bad_file() {
    let root = tempfile::tempdir().expect("root");
    let out = tempfile::tempdir().expect("out");

    write(&root.path().join("a/data.dts"), b"NOPE this is not a container");
    write(&root.path().join("b/later.srk"), &decrypt_with_password(PNG_BYTES, "key"));

    let config =
        ExtractConfig::new(root.path(), out.path()).with_policy(ErrorPolicy::SkipAndLog);
    let summary = extract::run(&config).expect("run");

    assert_eq!(summary.failed.len(), 1);
    assert!(summary.failed[0].ends_with("a/data.dts"));
    assert_eq!(summary.blobs, 1);
    assert!(out.path().join("b/later.png").is_file());
}

#[test]
fn encrypted_container_without_password_fails() {
    let root = tempfile::tempdir().expect("root");
    let out = tempfile::tempdir().expect("out");

    let builder = ContainerBuilder::new()
        .encrypted("secret")
        .entry(vec![group("G", &[PNG_BYTES])]);
    write(&root.path().join("data.dts"), &builder.build());

    let config = ExtractConfig::new(root.path(), out.path())
        .with_catalog(builder.catalog())
        .with_password(None);
    let err = extract::run(&config).unwrap_err();
    assert!(
        matches!(err, ExtractError::File { source: SdtsError::MissingPassword, .. }),
        "got {:?}",
        err
    );
}

#[cfg(not(windows))]
#[test]
fn hostile_group_names_stay_inside_output() {
    let root = tempfile::tempdir().expect("root");
    let out = tempfile::tempdir().expect("out");

    let builder = ContainerBuilder::new().entry(vec![group("..", &[b"x"]), group(".", &[b"y"])]);
    write(&root.path().join("data.dts"), &builder.build());

    let config = ExtractConfig::new(root.path(), out.path()).with_catalog(builder.catalog());
    let summary = extract::run(&config).expect("run");
    assert_eq!(summary.resources, 2);

    assert_eq!(fs::read(out.path().join("Entry1/__/0000.unknown")).expect("dots"), b"x");
    assert_eq!(fs::read(out.path().join("Entry1/_/0000.unknown")).expect("dot"), b"y");
    let top: Vec<_> = fs::read_dir(out.path())
        .expect("output dir")
        .map(|e| e.expect("dir entry").file_name())
        .collect();
    assert_eq!(top, vec![std::ffi::OsString::from("Entry1")]);
}

#[test]
fn separator_and_plain_group_names_both_survive() {
    let root = tempfile::tempdir().expect("root");
    let out = tempfile::tempdir().expect("out");

    let builder = ContainerBuilder::new().entry(vec![
        group("a/b", &[b"slashed"]),
        group("ab", &[b"plain"]),
        group("a_b", &[b"underscored"]),
    ]);
    write(&root.path().join("data.dts"), &builder.build());

    let config = ExtractConfig::new(root.path(), out.path()).with_catalog(builder.catalog());
    let summary = extract::run(&config).expect("run");
    assert_eq!(summary.resources, 3);

    let entry_dir = out.path().join("Entry1");
    assert_eq!(fs::read(entry_dir.join("a_b/0000.unknown")).expect("a/b"), b"slashed");
    assert_eq!(fs::read(entry_dir.join("ab/0000.unknown")).expect("ab"), b"plain");
    assert_eq!(
        fs::read(entry_dir.join("a_b~1/0000.unknown")).expect("a_b"),
        b"underscored"
    );
}

#[test]
fn colliding_group_dirs_get_distinct_suffixes() {
    let mut dirs = GroupDirs::new();
    assert_eq!(dirs.allocate("Map"), "Map");
    assert_eq!(dirs.allocate("Map"), "Map~1");
    assert_eq!(dirs.allocate("Map"), "Map~2");
    assert_eq!(dirs.allocate(""), "_unnamed");
}

#[cfg(not(windows))]
#[test]
fn unix_group_names_keep_punctuation() {
    assert_eq!(group_dir_name("Map: Town"), "Map: Town");
    assert_eq!(group_dir_name("What?"), "What?");
    assert_eq!(group_dir_name("a/b"), "a_b");
    assert_eq!(group_dir_name("ab"), "ab");
    assert_eq!(group_dir_name(".."), "__");
}

#[test]
fn unreadable_paths_do_not_abort_the_run() {
    let root = tempfile::tempdir().expect("root");
    let out = tempfile::tempdir().expect("out");
    let missing = root.path().join("does-not-exist");

    let config = ExtractConfig::new(&missing, out.path());
    assert_eq!(config.policy, ErrorPolicy::Abort);
    let summary = extract::run(&config).expect("run");
    assert_eq!(summary.walk_errors, 1);
    assert_eq!(summary.containers + summary.blobs, 0);
}
