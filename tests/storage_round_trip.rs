use std::fs;

use lists::io::config_io;
use lists::io::storage::{FileStorage, StorageError, load_notebook, save_notebook};
use lists::model::{Config, DocumentError, MAX_LISTS, Notebook};
use lists::tui::app::App;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn session_survives_save_and_load() {
    let tmp = TempDir::new().unwrap();
    let storage = FileStorage::new(tmp.path().join("lists.json"));

    let mut app = App::new(load_notebook(&storage).unwrap(), Config::default());
    for line in ["add Groceries", "1", "add Milk", "add Eggs", "done 2", "prio 1"] {
        app.submit(line);
    }
    save_notebook(&storage, &app.notebook).unwrap();

    let loaded = load_notebook(&storage).unwrap();
    assert_eq!(loaded, app.notebook);
    assert!(loaded.lists[0].tasks[0].prio);
    assert!(loaded.lists[0].tasks[1].done);
}

#[test]
fn document_layout() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("lists.json");
    let storage = FileStorage::new(&path);

    let mut app = App::new(Notebook::new(), Config::default());
    app.submit("add Main");
    app.submit("1");
    app.submit("add Hello world!");
    save_notebook(&storage, &app.notebook).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(json["version"], 1);
    assert!(json["saved_at"].is_string());
    assert_eq!(json["lists"][0]["name"], "Main");
    assert_eq!(
        json["lists"][0]["tasks"][0],
        serde_json::json!({ "body": "Hello world!", "done": false, "prio": false })
    );
}

#[test]
fn newer_document_version_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("lists.json");
    fs::write(&path, r#"{"version": 2, "lists": []}"#).unwrap();

    let err = load_notebook(&FileStorage::new(&path)).unwrap_err();
    assert!(matches!(
        err,
        StorageError::Document(DocumentError::VersionMismatch { found: 2, expected: 1 })
    ));
}

#[test]
fn oversized_document_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("lists.json");
    let lists: Vec<_> = (0..=MAX_LISTS)
        .map(|i| serde_json::json!({ "name": format!("L{}", i) }))
        .collect();
    let doc = serde_json::json!({ "version": 1, "lists": lists });
    fs::write(&path, doc.to_string()).unwrap();

    let err = load_notebook(&FileStorage::new(&path)).unwrap_err();
    assert!(matches!(
        err,
        StorageError::Document(DocumentError::TooManyLists { count: 20, limit: 19 })
    ));
}

#[test]
fn set_command_updates_settings_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(&path, "# keep me\n[ui]\nside_pane_width = 18\n").unwrap();

    let (settings, file) = config_io::read_settings(&path).unwrap();
    let mut config = Config::default();
    assert!(config_io::apply_settings(&mut config, &settings).is_empty());

    let mut app = App::new(Notebook::new(), config).with_settings_file(file);
    app.submit("settings");
    app.submit("set 1 yes");

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# keep me\n"));
    assert!(written.contains("side_pane_width = 18"));

    let (reread, _) = config_io::read_settings(&path).unwrap();
    let mut fresh = Config::default();
    config_io::apply_settings(&mut fresh, &reread);
    assert_eq!(fresh.get("print_done_tasks"), Some("yes"));
}
