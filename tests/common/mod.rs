// Shared test helpers for integration tests
#![allow(dead_code)]

use flash_resolver::{EngineConfig, FlashEngine, MessageCatalog};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::{tempdir, TempDir};

/// A catalog covering every level of the fallback chain for `admin/products`.
pub const SAMPLE_CATALOG: &str = r#"
[flash]
success = "OK"
failure = "Something went wrong."

[flash.create]
success = "%{resourceName} was successfully created."

[flash.products.create]
success = "%{resourceName} created!"
failure = "Could not create %{resourceName}: %{reason}"

[flash.admin.products.destroy]
success = "Admin removed %{resourceName}."

[flash.update.success]
_template = "%{resourceName} saved by %{actor}."
_defaults = { actor = "the system" }

[activerecord.models]
products = "Product"
user = "User"
"#;

pub fn sample_catalog() -> MessageCatalog {
    MessageCatalog::from_toml_str(SAMPLE_CATALOG).expect("sample catalog must parse")
}

pub fn engine_with(catalog: MessageCatalog) -> FlashEngine {
    FlashEngine::new(Arc::new(catalog), EngineConfig::default())
}

pub fn sample_engine() -> FlashEngine {
    engine_with(sample_catalog())
}

/// Creates a temporary directory holding the given `(file name, content)` pairs.
pub fn catalog_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().expect("Failed to create temporary directory");
    for (name, content) in files {
        write_file(dir.path(), name, content);
    }
    dir
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(&path, content).expect("Failed to write file");
    path
}

/// The fixtures shipped with the test suite.
pub fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}
