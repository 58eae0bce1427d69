use cosmetica_cache::{Cache, FileBackend, KvBackend, Slot};

#[test]
fn values_survive_reopening_the_directory() {
    let dir = tempfile::tempdir().unwrap();

    {
        let backend = FileBackend::open(dir.path()).unwrap();
        let cache = Cache::new(backend);
        cache.set("products", &vec!["a", "b"]).unwrap();
    }

    let backend = FileBackend::open(dir.path()).unwrap();
    let cache = Cache::new(backend);
    let loaded: Vec<String> = cache.get("products").unwrap().unwrap();
    assert_eq!(loaded, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn each_key_is_one_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();

    backend.set("user", r#"{"id":"x"}"#).unwrap();

    let on_disk = std::fs::read_to_string(dir.path().join("user.json")).unwrap();
    assert_eq!(on_disk, r#"{"id":"x"}"#);
    // No temp file is left behind after a successful write.
    assert!(!dir.path().join(".user.json.tmp").exists());
}

#[test]
fn remove_deletes_the_file_and_tolerates_absence() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();

    backend.set("user", "{}").unwrap();
    backend.remove("user").unwrap();
    assert!(!dir.path().join("user.json").exists());
    assert_eq!(backend.get("user").unwrap(), None);

    backend.remove("user").unwrap();
}

#[test]
fn open_creates_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let backend = FileBackend::open(&nested).unwrap();
    assert!(nested.is_dir());
    assert_eq!(backend.dir(), nested.as_path());
}

#[test]
fn slot_over_files() {
    let dir = tempfile::tempdir().unwrap();
    let slot: Slot<u64, _> = Slot::new(FileBackend::open(dir.path()).unwrap(), "counter");

    assert_eq!(slot.load().unwrap(), None);
    slot.store(&42).unwrap();

    let reopened: Slot<u64, _> = Slot::new(FileBackend::open(dir.path()).unwrap(), "counter");
    assert_eq!(reopened.load().unwrap(), Some(42));
}
