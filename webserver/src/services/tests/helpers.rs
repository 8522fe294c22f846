//! Test helpers for webserver service tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary directory with a `public/` static root inside it
pub struct StaticFixture {
    pub dir: TempDir,
    pub root: PathBuf,
}

/// Create a static root holding the given files, plus `secret.txt` next to it
pub fn create_static_root(files: &[(&str, &str)]) -> StaticFixture {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("public");
    fs::create_dir_all(&root).unwrap();

    for (relative, content) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
    }

    fs::write(dir.path().join("secret.txt"), "outside the static root").unwrap();
    StaticFixture { dir, root }
}
