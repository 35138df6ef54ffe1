//! 可见性测试

use crate::adapter::{FilesystemAdapter, Visibility};
use crate::tests::internal::fake_client::{FakeDiskClient, disk_adapter};

fn with_file() -> FakeDiskClient {
    let client = FakeDiskClient::new();
    client.add_file("disk:/doc.txt", b"x");
    client
}

#[tokio::test]
async fn set_public_then_read_back() {
    let adapter = disk_adapter(with_file());

    assert!(adapter.set_visibility("doc.txt", "public").await);
    assert_eq!(adapter.get_visibility("doc.txt").await, Some(Visibility::Public));

    assert!(adapter.set_visibility("doc.txt", "private").await);
    assert_eq!(adapter.get_visibility("doc.txt").await, Some(Visibility::Private));
}

#[tokio::test]
async fn invalid_value_is_rejected_without_remote_calls() {
    let adapter = disk_adapter(with_file());

    assert!(!adapter.set_visibility("doc.txt", "archived").await);
    assert!(!adapter.set_visibility("doc.txt", "Public").await);
    assert!(adapter.client().calls().is_empty());
}

#[tokio::test]
async fn matching_state_short_circuits() {
    let client = with_file();
    client.set_published("disk:/doc.txt", true);
    let adapter = disk_adapter(client);

    assert!(adapter.set_visibility("doc.txt", "public").await);
    assert_eq!(adapter.client().count_calls("publish"), 0);
}

#[tokio::test]
async fn unconfirmed_switch_is_false() {
    let client = with_file();
    client.refuse_publish();
    let adapter = disk_adapter(client);

    assert!(!adapter.set_visibility("doc.txt", "public").await);
    assert_eq!(adapter.client().count_calls("publish"), 1);
}

#[tokio::test]
async fn missing_resource_is_false() {
    let adapter = disk_adapter(FakeDiskClient::new());

    assert!(!adapter.set_visibility("ghost.txt", "public").await);
    assert_eq!(adapter.get_visibility("ghost.txt").await, None);
}

#[tokio::test]
async fn public_url_only_for_published() {
    let client = with_file();
    client.add_file("disk:/shared.txt", b"y");
    client.set_published("disk:/shared.txt", true);
    let adapter = disk_adapter(client);

    assert_eq!(adapter.get_public_url("doc.txt").await, None);
    assert_eq!(
        adapter.get_public_url("shared.txt").await.as_deref(),
        Some("https://yadi.sk/d/shared.txt")
    );
}
