//! 移动、复制、删除测试：成功、目标冲突、源不存在、其他失败

use crate::adapter::{AdapterError, FilesystemAdapter};
use crate::tests::internal::fake_client::{FakeDiskClient, disk_adapter};

fn seeded() -> FakeDiskClient {
    let client = FakeDiskClient::new();
    client
        .add_file("disk:/src/a.txt", b"a")
        .add_file("disk:/src/nested/b.txt", b"b")
        .add_file("disk:/taken.txt", b"t");
    client
}

// ═══════════════════════════ rename ═══════════════════════════

#[tokio::test]
async fn rename_moves_whole_subtree() {
    let adapter = disk_adapter(seeded());

    assert!(adapter.rename("src", "dst").await.unwrap());

    let client = adapter.client();
    assert!(!client.contains("disk:/src"));
    assert_eq!(client.contents("disk:/dst/nested/b.txt").unwrap(), "b");
}

#[tokio::test]
async fn rename_onto_existing_is_already_exists() {
    let adapter = disk_adapter(seeded());

    let err = adapter.rename("src/a.txt", "taken.txt").await.unwrap_err();

    assert!(matches!(err, AdapterError::AlreadyExists(ref p) if p == "taken.txt"));
    assert!(adapter.client().contains("disk:/src/a.txt"));
}

#[tokio::test]
async fn rename_missing_source_is_not_found() {
    let adapter = disk_adapter(seeded());

    let err = adapter.rename("ghost.txt", "other.txt").await.unwrap_err();

    assert!(matches!(err, AdapterError::NotFound(ref p) if p == "ghost.txt"));
}

#[tokio::test]
async fn rename_other_failure_is_false() {
    let client = seeded();
    client.fail_on("disk:/src/a.txt");
    let adapter = disk_adapter(client);

    assert!(!adapter.rename("src/a.txt", "moved.txt").await.unwrap());
}

// ═══════════════════════════ copy ═══════════════════════════

#[tokio::test]
async fn copy_keeps_source() {
    let adapter = disk_adapter(seeded());

    assert!(adapter.copy("src/a.txt", "copy.txt").await.unwrap());

    let client = adapter.client();
    assert_eq!(client.contents("disk:/src/a.txt").unwrap(), "a");
    assert_eq!(client.contents("disk:/copy.txt").unwrap(), "a");
}

#[tokio::test]
async fn copy_conflicts_surface_both_kinds() {
    let adapter = disk_adapter(seeded());

    assert!(matches!(
        adapter.copy("src/a.txt", "taken.txt").await,
        Err(AdapterError::AlreadyExists(_))
    ));
    assert!(matches!(
        adapter.copy("ghost.txt", "new.txt").await,
        Err(AdapterError::NotFound(_))
    ));
}

#[tokio::test]
async fn copy_into_missing_parent_is_false() {
    let adapter = disk_adapter(seeded());

    assert!(!adapter.copy("src/a.txt", "no/such/dir/a.txt").await.unwrap());
}

// ═══════════════════════════ delete ═══════════════════════════

#[tokio::test]
async fn delete_removes_file() {
    let adapter = disk_adapter(seeded());

    assert!(adapter.delete("taken.txt").await.unwrap());
    assert!(!adapter.client().contains("disk:/taken.txt"));
}

#[tokio::test]
async fn delete_dir_is_recursive() {
    let adapter = disk_adapter(seeded());

    assert!(adapter.delete_dir("src").await.unwrap());

    let client = adapter.client();
    assert!(!client.contains("disk:/src/nested/b.txt"));
    assert!(client.contains("disk:/taken.txt"));
}

#[tokio::test]
async fn delete_missing_is_not_found() {
    let adapter = disk_adapter(seeded());

    let err = adapter.delete("ghost").await.unwrap_err();

    assert!(matches!(err, AdapterError::NotFound(ref p) if p == "ghost"));
}

#[tokio::test]
async fn delete_other_failure_is_false() {
    let client = seeded();
    client.fail_on("disk:/taken.txt");
    let adapter = disk_adapter(client);

    assert!(!adapter.delete("taken.txt").await.unwrap());
}
