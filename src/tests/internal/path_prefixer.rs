//! 路径前缀转换测试

use crate::adapter::{PathPrefix, PathPrefixer};

#[test]
fn remove_undoes_apply_for_relative_paths() {
    for prefix in [PathPrefix::Disk, PathPrefix::App] {
        let prefixer = PathPrefixer::new(prefix);
        for path in ["", "a", "a/b/c.txt", "папка/файл.txt", "with space/x", "a/"] {
            assert_eq!(prefixer.remove(&prefixer.apply(path)), path, "{prefix} {path}");
        }
    }
}

#[test]
fn apply_prepends_marker_and_drops_leading_separators() {
    let disk = PathPrefixer::new(PathPrefix::Disk);
    let app = PathPrefixer::new(PathPrefix::App);

    assert_eq!(disk.apply("docs/a.txt"), "disk:/docs/a.txt");
    assert_eq!(disk.apply("/docs/a.txt"), "disk:/docs/a.txt");
    assert_eq!(disk.apply("\\docs"), "disk:/docs");
    assert_eq!(app.apply("a"), "app:/a");
    assert_eq!(app.apply(""), "app:/");
}

#[test]
fn remove_leaves_foreign_paths_untouched() {
    let app = PathPrefixer::new(PathPrefix::App);

    assert_eq!(app.remove("app:/x/y"), "x/y");
    assert_eq!(app.remove("disk:/x/y"), "disk:/x/y");
}

#[test]
fn prefix_parses_markers_and_short_names() {
    assert_eq!("disk:/".parse::<PathPrefix>().unwrap(), PathPrefix::Disk);
    assert_eq!("app".parse::<PathPrefix>().unwrap(), PathPrefix::App);
    assert!("ftp:/".parse::<PathPrefix>().is_err());
    assert_eq!(PathPrefix::default(), PathPrefix::Disk);
}
