use anyhow::{Context, Result};
use rectclip::Window;
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::output::WindowDoc;

/// Metadata recorded next to a clip result.
pub struct Payload {
    pub window: WindowDoc,
    pub params: Value,
    pub vk: Option<String>,
}

impl Payload {
    pub fn new(window: &Window, params: Value) -> Self {
        Self {
            window: WindowDoc::from(window),
            params,
            vk: None,
        }
    }

    pub fn with_vk(mut self, vk: Option<String>) -> Self {
        self.vk = vk;
        self
    }
}

/// Write `<artifact>.provenance.json` next to a clip result.
///
/// Records the git commit, crate version, run tag, callsite, the clipping
/// window the result was computed against, the mode params, and the output path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "rectclip_version": rectclip::VERSION,
        "vk": payload.vk,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "window": payload.window,
        "params": payload.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

/// `dir/clip.json` → `dir/clip.provenance.json`.
fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map_or_else(|| OsString::from("clip"), |s| s.to_os_string());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// `GIT_COMMIT` if set and non-empty, else `git rev-parse HEAD`, else `"unknown"`.
pub fn current_git_rev() -> String {
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                String::from_utf8(output.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/clip.json");
        let derived = provenance_path(base);
        assert_eq!(derived, Path::new("/tmp/output/clip.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_window_params_and_tag() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("clip.json");
        fs::write(&artifact, "{}").unwrap();
        let w = Window::new(-4.0, -3.0, 2.0, 1.0).unwrap();
        let payload = Payload::new(&w, json!({"mode": "segment"})).with_vk(Some("t-1".into()));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["mode"], "segment");
        assert_eq!(parsed["vk"], "t-1");
        assert_eq!(parsed["window"]["x_min"], -4.0);
        assert_eq!(parsed["window"]["y_max"], 1.0);
        assert_eq!(parsed["rectclip_version"], rectclip::VERSION);
    }
}
