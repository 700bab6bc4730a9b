//! Loading of result sets and metadata state from JSON files.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, ViewError};
use crate::meta::{MetaState, StoreState};
use crate::types::Dataset;

const STDIN_PATH: &str = "-";

/// Where the viewer reads its inputs from. Re-read in full on every reload.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub data: Option<PathBuf>,
    pub meta: Option<PathBuf>,
}

impl Sources {
    /// Stdin can only be consumed once, so it is never re-read.
    pub fn can_reload(&self) -> bool {
        self.data.as_deref() != Some(Path::new(STDIN_PATH))
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| ViewError::io(path, e))?;
        return Ok(buf);
    }
    fs::read_to_string(path).map_err(|e| ViewError::io(path, e))
}

/// Parse a result set. JSON `null` is the "no result" case.
pub fn parse_dataset(path: &Path, contents: &str) -> Result<Option<Dataset>> {
    serde_json::from_str(contents).map_err(|e| ViewError::json(path, e))
}

/// Load the result set. No path means no result.
pub fn load_dataset(path: Option<&Path>) -> Result<Option<Dataset>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let contents = read_input(path)?;
    let dataset = parse_dataset(path, &contents)?;
    debug!(
        path = %path.display(),
        rows = ?dataset.as_ref().map(Vec::len),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Load the metadata slice of a store state file. No path means empty metadata.
pub fn load_meta(path: Option<&Path>) -> Result<MetaState> {
    let Some(path) = path else {
        return Ok(MetaState::default());
    };
    let contents = read_input(path)?;
    let state: StoreState =
        serde_json::from_str(&contents).map_err(|e| ViewError::json(path, e))?;
    Ok(state.into_meta())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::items::user_detail_items;
    use serde_json::json;

    #[test]
    fn test_null_file_is_absent_dataset() {
        let parsed = parse_dataset(Path::new("x.json"), "null").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn test_empty_array_is_present_dataset() {
        let parsed = parse_dataset(Path::new("x.json"), "[]").unwrap();
        assert_eq!(parsed, Some(vec![]));
    }

    #[test]
    fn test_non_tabular_json_is_rejected() {
        let err = parse_dataset(Path::new("x.json"), "{\"a\": 1}").unwrap_err();
        assert!(matches!(err, ViewError::Json { .. }));
        assert!(err.to_string().contains("x.json"));
    }

    #[test]
    fn test_load_files_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join("rows.json");
        let meta_path = dir.path().join("state.json");
        fs::write(&data_path, json!([["n"], [1]]).to_string()).unwrap();
        fs::write(&meta_path, json!({"meta": {"labels": [{"val": "A"}]}}).to_string()).unwrap();

        let dataset = load_dataset(Some(&data_path)).unwrap().unwrap();
        assert_eq!(dataset.len(), 2);

        let meta = load_meta(Some(&meta_path)).unwrap();
        assert_eq!(meta.labels.unwrap()[0].val, "A");
    }

    #[test]
    fn test_null_roles_keep_the_rest_of_the_state() {
        let dir = tempfile::tempdir().unwrap();
        let meta_path = dir.path().join("state.json");
        fs::write(
            &meta_path,
            r#"{"meta":{"labels":[{"val":"A"}],"userDetails":{"username":"neo4j","roles":null}}}"#,
        )
        .unwrap();

        let meta = load_meta(Some(&meta_path)).unwrap();
        assert_eq!(meta.labels.as_ref().unwrap()[0].val, "A");

        let list = user_detail_items(meta.user_details.as_ref());
        let texts: Vec<_> = list.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Username: neo4j", "Roles: -"]);
    }

    #[test]
    fn test_missing_paths_default() {
        assert!(load_dataset(None).unwrap().is_none());
        assert_eq!(load_meta(None).unwrap(), MetaState::default());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_dataset(Some(Path::new("/nonexistent/rows.json"))).unwrap_err();
        assert!(matches!(err, ViewError::Io { .. }));
    }

    #[test]
    fn test_stdin_source_is_not_reloadable() {
        let sources = Sources {
            data: Some(PathBuf::from("-")),
            meta: None,
        };
        assert!(!sources.can_reload());
        assert!(Sources::default().can_reload());
    }
}
