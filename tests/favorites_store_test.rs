//! 收藏夹存储测试
//!
//! 测试收藏夹文件的加载、保存和错误处理

use ipedit::app::config::favorites::{
    FavoriteEntry, FavoritesDocument, PanelLayout, WindowLayout,
};
use ipedit::app::config::store::{
    add_favorite, delete_favorite, FavoritesStore,
};
use ipedit::IpEditError;
use std::fs;
use tempfile::TempDir;

fn entry(name: &str, ip: &str) -> FavoriteEntry {
    FavoriteEntry {
        name: name.to_string(),
        ip: ip.to_string(),
        subnet: "255.255.255.0".to_string(),
        gateway: "10.0.0.1, 10.0.0.2,".to_string(),
        dns: "8.8.8.8".to_string(),
    }
}

fn store_in(dir: &TempDir) -> FavoritesStore {
    FavoritesStore::with_file(dir.path().join("ipedit_config.json"))
}

#[test]
fn test_missing_file_loads_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let doc = store_in(&temp_dir).load();

    assert!(doc.favorites.is_empty());
    assert_eq!(doc.window.geometry, "800x400");
    assert_eq!(doc.panel.position, 400);
}

#[test]
fn test_empty_file_loads_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    fs::write(store.path(), "").unwrap();

    assert_eq!(store.load(), FavoritesDocument::default());
}

#[test]
fn test_malformed_file_loads_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    fs::write(store.path(), "{\"favorites\": [ {\"name\": ").unwrap();

    assert_eq!(store.load(), FavoritesDocument::default());
}

#[test]
fn test_round_trip_preserves_arbitrary_strings() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let doc = FavoritesDocument {
        favorites: vec![
            entry("办公室", "192.168.1.10"),
            FavoriteEntry::default(),
            entry("quote \" and \\ slash", "not an ip"),
            entry("dup", "192.168.1.10"),
        ],
        window: WindowLayout {
            geometry: "1024x768".to_string(),
        },
        panel: PanelLayout { position: 512 },
    };

    store.save(&doc).unwrap();
    assert_eq!(store.load(), doc);
}

#[test]
fn test_saved_file_is_pretty_utf8_json() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);
    let doc = add_favorite(
        &FavoritesDocument::default(),
        entry("家里", "10.0.0.5"),
    );

    store.save(&doc).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    assert!(content.contains("\n  \"favorites\""));
    assert!(content.contains("家里"));
    assert!(content.contains("\"geometry\": \"800x400\""));
    assert!(content.contains("\"position\": 400"));
}

#[test]
fn test_add_then_save_load_keeps_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_in(&temp_dir);

    let doc = add_favorite(
        &add_favorite(
            &FavoritesDocument::default(),
            entry("first", "10.0.0.1"),
        ),
        entry("second", "10.0.0.2"),
    );
    store.save(&doc).unwrap();

    let third = entry("third", "10.0.0.3");
    let doc = add_favorite(&store.load(), third.clone());
    store.save(&doc).unwrap();

    let loaded = store.load();
    let names: Vec<_> =
        loaded.favorites.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);
    assert_eq!(loaded.favorites[2], third);
}

#[test]
fn test_delete_preserves_order_of_rest() {
    let doc = FavoritesDocument {
        favorites: vec![
            entry("a", "1.1.1.1"),
            entry("b", "2.2.2.2"),
            entry("c", "3.3.3.3"),
        ],
        ..FavoritesDocument::default()
    };

    let doc = delete_favorite(&doc, 1).unwrap();
    let names: Vec<_> =
        doc.favorites.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["a", "c"]);
}

#[test]
fn test_delete_out_of_range_leaves_list_unchanged() {
    let doc = FavoritesDocument {
        favorites: vec![entry("a", "1.1.1.1"), entry("b", "2.2.2.2")],
        ..FavoritesDocument::default()
    };
    let before = doc.clone();

    let result = delete_favorite(&doc, 2);

    assert!(matches!(
        result,
        Err(IpEditError::OutOfRange { index: 2, len: 2 })
    ));
    assert_eq!(doc, before);
}

#[test]
fn test_save_to_unwritable_path_fails() {
    let temp_dir = TempDir::new().unwrap();
    // 目标路径是一个目录，写入必然失败
    let store = FavoritesStore::with_file(temp_dir.path());

    let result = store.save(&FavoritesDocument::default());

    assert!(matches!(result, Err(IpEditError::ConfigFile { .. })));
}
