//! Static site export.
//!
//! Writes the files a static website host needs: `index.html` as the index
//! document, `404.html` as the error document, and `favicon.ico`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use codeguardian_core::favicon::favicon_ico;
use codeguardian_core::{LandingPage, not_found_page};

/// Write the site into `out_dir`, creating it if needed.
///
/// Returns the written paths in write order. Existing files are overwritten.
pub fn export_site(page: &LandingPage, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let files: [(&str, Vec<u8>); 3] = [
        ("index.html", page.to_html().into_bytes()),
        ("404.html", not_found_page(None).into_string().into_bytes()),
        ("favicon.ico", favicon_ico()),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, contents) in files {
        let path = out_dir.join(name);
        fs::write(&path, contents)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
