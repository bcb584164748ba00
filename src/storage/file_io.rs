//! JSON file helpers
//!
//! Reads tolerate a missing file. Writes go through a sibling temp file and a
//! rename, so the target is either the old content or the new content.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SpendrError;

fn storage_error(action: &str, path: &Path, err: impl std::fmt::Display) -> SpendrError {
    SpendrError::Storage(format!("Failed to {} {}: {}", action, path.display(), err))
}

/// Read a JSON document, or `T::default()` if the file does not exist
pub fn read_json<T, P>(path: P) -> Result<T, SpendrError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(T::default()),
        Err(e) => return Err(storage_error("read", path, e)),
    };

    serde_json::from_slice(&raw).map_err(|e| storage_error("parse", path, e))
}

/// Replace `path` with `data` as pretty-printed JSON
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SpendrError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| storage_error("create directory", parent, e))?;
    }

    // Same directory as the target, so the rename stays on one filesystem
    let temp_path = temp_path_for(path);

    let write_temp = || -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        serde_json::to_writer_pretty(&mut writer, data)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        writer.get_ref().sync_all()
    };

    if let Err(e) = write_temp().and_then(|()| fs::rename(&temp_path, path)) {
        let _ = fs::remove_file(&temp_path);
        return Err(storage_error("write", path, e));
    }

    Ok(())
}

/// `expense.json` -> `expense.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize, Default)]
    struct Record {
        label: String,
        count: u32,
    }

    #[test]
    fn test_missing_file_reads_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        assert_eq!(read_json::<Record, _>(&path).unwrap(), Record::default());
        assert!(read_json::<Vec<Record>, _>(&path).unwrap().is_empty());
    }

    #[test]
    fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("record.json");
        let record = Record {
            label: "rent".to_string(),
            count: 3,
        };

        write_json_atomic(&path, &record).unwrap();

        assert_eq!(read_json::<Record, _>(&path).unwrap(), record);
        assert!(!temp_path_for(&path).exists());
        assert!(fs::read_to_string(&path).unwrap().ends_with("}\n"));
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("list.json");

        write_json_atomic(&path, &vec![1, 2, 3]).unwrap();
        write_json_atomic(&path, &vec![4]).unwrap();

        assert_eq!(read_json::<Vec<i32>, _>(&path).unwrap(), vec![4]);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b").join("record.json");

        write_json_atomic(&path, &Record::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_malformed_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<Record, _>(&path).unwrap_err();
        assert!(matches!(err, SpendrError::Storage(msg) if msg.contains("Failed to parse")));
    }

    #[test]
    fn test_temp_path_for() {
        assert_eq!(
            temp_path_for(Path::new("data/expense.json")),
            PathBuf::from("data/expense.json.tmp")
        );
    }
}
