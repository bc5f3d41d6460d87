//! Export of the visible employee rows to a JSON file

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::models::Employee;

/// Write `records` as pretty JSON into `dir`, named by local timestamp
pub fn export_json(records: &[Employee], dir: &Path) -> Result<PathBuf> {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let path = dir.join(format!("employees-{}.json", stamp));

    let body = serde_json::to_string_pretty(records).context("failed to serialize employees")?;
    std::fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(count = records.len(), path = %path.display(), "exported employees");
    Ok(path)
}

pub fn export_to_working_dir(records: &[Employee]) -> Result<PathBuf> {
    let dir = std::env::current_dir().context("failed to resolve working directory")?;
    export_json(records, &dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_records_as_json_array() {
        let dir = tempfile::tempdir().unwrap();

        let records = vec![Employee::draft("Ann", "Lee", "ann@x.com").with_id(1)];
        let path = export_json(&records, dir.path()).unwrap();

        let written: Vec<Employee> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, records);
        assert!(path.file_name().unwrap().to_string_lossy().starts_with("employees-"));
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let err = export_json(&[], &dir.path().join("missing")).unwrap_err();
        assert!(err.to_string().starts_with("failed to write"));
    }
}
