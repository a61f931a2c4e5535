use std::collections::BTreeMap;
use std::path::Path;

use cloud_invoker::file::{expand_home, load_file_content, user_home_dir, write_to_file};

#[test]
fn strings_are_written_raw() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("key.pem");

    write_to_file(&path, Some("-----BEGIN KEY-----\n")).expect("write should succeed");

    assert_eq!(
        load_file_content(&path).expect("read should succeed"),
        b"-----BEGIN KEY-----\n"
    );
}

#[test]
fn other_values_are_written_as_tab_indented_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("instances.json");
    let data = BTreeMap::from([("ids", vec!["i-1", "i-2"])]);

    write_to_file(&path, Some(&data)).expect("write should succeed");

    let written = std::fs::read_to_string(&path).expect("file should exist");
    assert_eq!(written, "{\n\t\"ids\": [\n\t\t\"i-1\",\n\t\t\"i-2\"\n\t]\n}");
}

#[test]
fn none_removes_the_previous_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("output.txt");
    std::fs::write(&path, "stale").expect("seed file");

    write_to_file::<str>(&path, None).expect("write should succeed");

    assert!(!path.exists());
}

#[test]
fn existing_content_is_replaced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("output.txt");
    std::fs::write(&path, "a much longer stale payload").expect("seed file");

    write_to_file(&path, Some("new")).expect("write should succeed");

    assert_eq!(std::fs::read_to_string(&path).expect("read"), "new");
}

#[test]
fn loading_a_missing_file_names_the_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing.txt");

    let err = load_file_content(&path).expect_err("read should fail");

    assert!(format!("{err:#}").contains("missing.txt"));
}

#[test]
fn tilde_expands_to_the_home_directory() {
    let Ok(home) = user_home_dir() else {
        return;
    };

    assert_eq!(
        expand_home(Path::new("~/.ssh/id_rsa")).expect("expand"),
        home.join(".ssh/id_rsa")
    );
    assert_eq!(expand_home(Path::new("~")).expect("expand"), home);
}
