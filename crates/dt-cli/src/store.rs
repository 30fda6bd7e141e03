//! One-activity-per-file JSON storage.

use std::fs;
use std::path::{Path, PathBuf};

use dt_core::ActivityRecord;

/// Read and validate the activity stored at `path`.
pub fn load(path: &Path) -> Result<ActivityRecord, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
    let record: ActivityRecord = serde_json::from_str(&content)
        .map_err(|e| format!("invalid activity file '{}': {e}", path.display()))?;
    record
        .validate()
        .map_err(|e| format!("invalid activity file '{}': {e}", path.display()))?;
    Ok(record)
}

/// Write `record` to `path` as pretty-printed JSON.
pub fn save(path: &Path, record: &ActivityRecord) -> Result<(), String> {
    let mut json = serde_json::to_string_pretty(record).map_err(|e| e.to_string())?;
    json.push('\n');
    fs::write(path, json).map_err(|e| format!("cannot write '{}': {e}", path.display()))?;
    tracing::debug!(path = %path.display(), "saved activity");
    Ok(())
}

/// Save a new activity, refusing to overwrite unless `force` is set.
pub fn create(path: &Path, record: &ActivityRecord, force: bool) -> Result<(), String> {
    if path.exists() && !force {
        return Err(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        ));
    }
    save(path, record)
}

/// Every `*.json` file in `dir` that holds a valid activity, sorted by path.
pub fn scan(dir: &Path) -> Result<Vec<(PathBuf, ActivityRecord)>, String> {
    let entries =
        fs::read_dir(dir).map_err(|e| format!("cannot read '{}': {e}", dir.display()))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut found = Vec::new();
    for path in paths {
        match load(&path) {
            Ok(record) => found.push((path, record)),
            Err(e) => tracing::warn!("skipping {e}"),
        }
    }
    Ok(found)
}
