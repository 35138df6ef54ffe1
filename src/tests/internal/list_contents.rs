//! 列目录测试：空目录、非目录、递归、分页、失败时整体返回空

use std::collections::BTreeSet;

use crate::adapter::{FilesystemAdapter, LIST_PAGE_SIZE};
use crate::tests::internal::fake_client::{FakeDiskClient, disk_adapter};

#[tokio::test]
async fn empty_root_lists_nothing() {
    let adapter = disk_adapter(FakeDiskClient::new());

    assert!(adapter.list_contents("", false).await.is_empty());
    assert_eq!(adapter.client().count_calls("get"), 1);
}

#[tokio::test]
async fn file_target_lists_nothing() {
    let client = FakeDiskClient::new();
    client.add_file("disk:/a.txt", b"x");
    let adapter = disk_adapter(client);

    assert!(adapter.list_contents("a.txt", true).await.is_empty());
}

#[tokio::test]
async fn shallow_listing_stays_at_one_level() {
    let client = FakeDiskClient::new();
    client
        .add_file("disk:/docs/a.txt", b"a")
        .add_file("disk:/docs/sub/b.txt", b"b");
    let adapter = disk_adapter(client);

    let listing = adapter.list_contents("docs", false).await;

    let paths: Vec<&str> = listing.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, ["docs/a.txt", "docs/sub"]);
}

#[tokio::test]
async fn recursive_listing_returns_every_entry() {
    let client = FakeDiskClient::new();
    client
        .add_file("disk:/root/a.txt", b"a")
        .add_file("disk:/root/x/b.txt", b"b")
        .add_file("disk:/root/x/y/c.txt", b"c")
        .add_dir("disk:/root/x/y/empty")
        .add_file("disk:/outside.txt", b"o");
    let adapter = disk_adapter(client);

    let listing = adapter.list_contents("/root/.", true).await;

    let paths: BTreeSet<&str> = listing.iter().map(|e| e.path.as_str()).collect();
    let expected: BTreeSet<&str> = [
        "root/a.txt",
        "root/x",
        "root/x/b.txt",
        "root/x/y",
        "root/x/y/c.txt",
        "root/x/y/empty",
    ]
    .into_iter()
    .collect();

    assert_eq!(listing.len(), 6);
    assert_eq!(paths, expected);
    assert!(listing.iter().all(|e| !e.path.starts_with("disk:")));
}

#[tokio::test]
async fn directory_is_listed_before_its_children() {
    let client = FakeDiskClient::new();
    client.add_file("disk:/p/q/r.txt", b"r");
    let adapter = disk_adapter(client);

    let listing = adapter.list_contents("p", true).await;

    let paths: Vec<&str> = listing.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(paths, ["p/q", "p/q/r.txt"]);
}

#[tokio::test]
async fn pagination_drains_every_page() {
    let client = FakeDiskClient::new();
    for i in 0..250 {
        client.add_file(&format!("disk:/many/f{i:03}.txt"), b"x");
    }
    let adapter = disk_adapter(client);

    let listing = adapter.list_contents("many", false).await;

    assert_eq!(listing.len(), 250);
    assert_eq!(listing[0].path, "many/f000.txt");
    assert_eq!(listing[249].path, "many/f249.txt");
    // 第一页 + 后两页
    assert_eq!(adapter.client().count_calls("get"), 3);
    assert_eq!(LIST_PAGE_SIZE, 100);
}

#[tokio::test]
async fn exact_page_boundary_does_not_over_fetch() {
    let client = FakeDiskClient::new();
    for i in 0..200 {
        client.add_file(&format!("disk:/even/f{i:03}"), b"x");
    }
    let adapter = disk_adapter(client);

    assert_eq!(adapter.list_contents("even", false).await.len(), 200);
    assert_eq!(adapter.client().count_calls("get"), 2);
}

#[tokio::test]
async fn nested_failure_empties_whole_listing() {
    let client = FakeDiskClient::new();
    client
        .add_file("disk:/tree/a.txt", b"a")
        .add_file("disk:/tree/broken/b.txt", b"b");
    client.fail_on("disk:/tree/broken");
    let adapter = disk_adapter(client);

    assert!(adapter.list_contents("tree", true).await.is_empty());
    // 非递归时不会碰到故障目录
    assert_eq!(adapter.list_contents("tree", false).await.len(), 2);
}

#[tokio::test]
async fn missing_directory_lists_nothing() {
    let adapter = disk_adapter(FakeDiskClient::new());

    assert!(adapter.list_contents("ghost", true).await.is_empty());
}

#[tokio::test]
async fn dotted_subdirectories_keep_their_names() {
    let client = FakeDiskClient::new();
    client
        .add_file("disk:/a.txt", b"a")
        .add_file("disk:/.config/x.txt", b"x")
        .add_file("disk:/v1./y.txt", b"y");
    let adapter = disk_adapter(client);

    let listing = adapter.list_contents("", true).await;

    let paths: BTreeSet<&str> = listing.iter().map(|e| e.path.as_str()).collect();
    let expected: BTreeSet<&str> = [
        "a.txt",
        ".config",
        ".config/x.txt",
        "v1.",
        "v1./y.txt",
    ]
    .into_iter()
    .collect();
    assert_eq!(listing.len(), 5);
    assert_eq!(paths, expected);

    let client = adapter.client();
    assert_eq!(client.count_calls("get"), 3);
    assert!(client.calls().contains(&"get disk:/.config".to_string()));
    assert!(client.calls().contains(&"get disk:/v1.".to_string()));
}
