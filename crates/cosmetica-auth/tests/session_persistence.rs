use cosmetica_auth::{AuthError, Role, SessionGate, USER_KEY};
use cosmetica_cache::{FileBackend, KvBackend};
use cosmetica_catalog::CatalogStore;

#[test]
fn session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let user = {
        let mut gate = SessionGate::restore(FileBackend::open(dir.path()).unwrap()).unwrap();
        gate.login("mira@shop.test", Role::Admin).unwrap().clone()
    };

    let gate = SessionGate::restore(FileBackend::open(dir.path()).unwrap()).unwrap();
    assert_eq!(gate.current(), Some(&user));
    assert!(gate.is_admin());
    assert!(dir.path().join("user.json").exists());
}

#[test]
fn logout_removes_user_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut gate = SessionGate::restore(FileBackend::open(dir.path()).unwrap()).unwrap();
    gate.login("mira@shop.test", Role::Customer).unwrap();
    gate.logout().unwrap();

    assert!(!dir.path().join("user.json").exists());
    let gate = SessionGate::restore(FileBackend::open(dir.path()).unwrap()).unwrap();
    assert!(gate.current().is_none());
}

#[test]
fn session_and_catalog_share_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let backend = FileBackend::open(dir.path()).unwrap();

    let mut store = CatalogStore::open(backend.clone()).unwrap();
    let mut gate = SessionGate::restore(backend.clone()).unwrap();
    gate.login("ops@shop.test", Role::Admin).unwrap();

    {
        let mut admin = gate.admin(&mut store).unwrap();
        assert!(admin.delete(&"3".into()).unwrap());
    }

    let reopened = CatalogStore::open(backend.clone()).unwrap();
    assert_eq!(reopened.list().len(), 5);
    assert!(backend.exists(USER_KEY).unwrap());
}

#[test]
fn corrupt_user_file_is_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("user.json"), "[1, 2").unwrap();

    let err = SessionGate::restore(FileBackend::open(dir.path()).unwrap()).unwrap_err();
    assert!(matches!(err, AuthError::CorruptSession(_)));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("user.json")).unwrap(),
        "[1, 2"
    );

    SessionGate::discard(FileBackend::open(dir.path()).unwrap()).unwrap();
    assert!(!dir.path().join("user.json").exists());
}
