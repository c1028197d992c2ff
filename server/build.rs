//! Bundles the compiled frontend under `static/` for `include_dir!`.

use std::fs;
use std::path::Path;

use fs_extra::dir::CopyOptions;

const FRONTEND_DIST: &str = "../frontend/dist";
const BUNDLE_DIR: &str = "static";

fn main() -> Result<(), fs_extra::error::Error> {
    println!("cargo:rerun-if-changed={}", FRONTEND_DIST);

    let dist = Path::new(FRONTEND_DIST);
    let bundle = Path::new(BUNDLE_DIR);

    if dist.exists() {
        refresh_bundle(dist, bundle)?;
    } else {
        println!("cargo:warning=frontend/dist not found, embedding an empty bundle");
    }

    // `include_dir!` needs the directory even when it is empty.
    fs::create_dir_all(bundle.join("dist"))?;
    Ok(())
}

/// Replaces `bundle` with a fresh copy of `dist`, landing at `bundle/dist`.
fn refresh_bundle(dist: &Path, bundle: &Path) -> Result<(), fs_extra::error::Error> {
    if bundle.exists() {
        fs::remove_dir_all(bundle)?;
    }
    fs::create_dir_all(bundle)?;
    fs_extra::dir::copy(dist, bundle, &CopyOptions::new().overwrite(true).copy_inside(true))?;
    Ok(())
}
