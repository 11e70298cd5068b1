use std::fs;
use std::path::{Path, PathBuf};

use magboots_shim::{
    GlobalResolver, PairResolver, ShimLayout, TargetResolver, WorkspaceResolver, ini,
};
use tempfile::tempdir;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn resolver(start: &Path, shim_dir: &Path) -> impl TargetResolver {
    let layout = ShimLayout::default();
    PairResolver::new(
        WorkspaceResolver::new(start, layout.clone()),
        GlobalResolver::new(shim_dir, &layout),
    )
}

#[test]
fn test_search_order() {
    let shim = tempdir().unwrap();
    let work = tempdir().unwrap();

    write(&shim.path().join("tools.ini"), "git = /global/git\nphp = /global/php\n");
    write(&work.path().join(".magboots/tools.ini"), "php = /outer/php\n");
    write(
        &work.path().join("app/.magboots/tools.ini"),
        "# app pins\nphp8 = /app/php8\n",
    );
    let start = work.path().join("app/src");
    fs::create_dir_all(&start).unwrap();

    let r = resolver(&start, shim.path());
    assert_eq!(r.resolve("php"), Some(PathBuf::from("/outer/php")));
    assert_eq!(r.resolve("php8"), Some(PathBuf::from("/app/php8")));
    assert_eq!(r.resolve("git"), Some(PathBuf::from("/global/git")));
    assert_eq!(r.resolve("node"), None);
}

#[test]
fn test_outside_workspace_uses_global() {
    let shim = tempdir().unwrap();
    let work = tempdir().unwrap();

    write(&shim.path().join("tools.ini"), "foo = /global/foo\n");
    write(&work.path().join(".magboots/tools.ini"), "foo = /workspace/foo\n");

    assert_eq!(
        resolver(work.path(), shim.path()).resolve("foo"),
        Some(PathBuf::from("/workspace/foo"))
    );
    assert_eq!(
        resolver(shim.path(), shim.path()).resolve("foo"),
        Some(PathBuf::from("/global/foo"))
    );
}

#[test]
fn test_comment_only_tables() {
    let shim = tempdir().unwrap();
    let table = shim.path().join("tools.ini");
    write(&table, "; note\n# note\n\n\t\n");

    for key in ["note", "git", "#", ";"] {
        assert_eq!(ini::lookup(&table, key), None);
    }
    assert_eq!(resolver(shim.path(), shim.path()).resolve("note"), None);
}
