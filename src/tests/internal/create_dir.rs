//! 建目录测试：逐级创建、已存在时不发创建请求、公开最后一级、事件、失败

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::adapter::{FilesystemAdapter, Visibility, WriteOptions};
use crate::disk::{ResourceEvent, ResourceEventKind};
use crate::tests::internal::fake_client::{FakeDiskClient, disk_adapter};

#[tokio::test]
async fn creates_every_missing_level() {
    let adapter = disk_adapter(FakeDiskClient::new());

    let results = adapter
        .create_dir("a/b/c", &WriteOptions::new())
        .await
        .expect("应创建成功");

    let paths: Vec<&str> = results.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, ["a", "a/b", "a/b/c"]);
    assert!(results.iter().all(|e| e.is_dir() && e.size.is_none()));
    assert_eq!(adapter.client().count_calls("create"), 3);
}

#[tokio::test]
async fn existing_levels_are_not_recreated() {
    let client = FakeDiskClient::new();
    client.add_dir("disk:/a/b/c");
    let adapter = disk_adapter(client);

    let results = adapter.create_dir("a/b/c", &WriteOptions::new()).await.unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(adapter.client().count_calls("create"), 0);
}

#[tokio::test]
async fn only_missing_tail_is_created() {
    let client = FakeDiskClient::new();
    client.add_dir("disk:/a");
    let adapter = disk_adapter(client);

    adapter.create_dir("/a//b/c/", &WriteOptions::new()).await.unwrap();

    let client = adapter.client();
    assert_eq!(client.count_calls("create"), 2);
    assert!(client.contains("disk:/a/b/c"));
}

#[tokio::test]
async fn public_option_publishes_final_level_only() {
    let adapter = disk_adapter(FakeDiskClient::new());
    let options = WriteOptions::new().with_visibility(Visibility::Public);

    let results = adapter.create_dir("x/y", &options).await.unwrap();

    assert_eq!(results[0].visibility, Visibility::Private);
    assert_eq!(results[1].visibility, Visibility::Public);
    let client = adapter.client();
    assert!(!client.is_published("disk:/x"));
    assert!(client.is_published("disk:/x/y"));
}

#[tokio::test]
async fn created_listener_fires_per_new_level() {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let options = WriteOptions::new().on(ResourceEventKind::Created, move |_: &ResourceEvent| {
        counter.fetch_add(1, Ordering::Relaxed);
    });

    let client = FakeDiskClient::new();
    client.add_dir("disk:/a");
    let adapter = disk_adapter(client);
    adapter.create_dir("a/b/c", &options).await.unwrap();

    assert_eq!(count.load(Ordering::Relaxed), 2);
}

#[tokio::test]
async fn failure_or_empty_name_returns_none() {
    let client = FakeDiskClient::new();
    client.fail_on("disk:/a/b");
    let adapter = disk_adapter(client);

    assert!(adapter.create_dir("a/b/c", &WriteOptions::new()).await.is_none());
    assert!(adapter.create_dir("", &WriteOptions::new()).await.is_none());
}

#[tokio::test]
async fn file_in_the_way_returns_none() {
    let client = FakeDiskClient::new();
    client.add_file("disk:/a", b"not a dir");
    let adapter = disk_adapter(client);

    assert!(adapter.create_dir("a/b", &WriteOptions::new()).await.is_none());
}
