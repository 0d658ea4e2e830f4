//! Run metadata written next to each artifact: which command produced it,
//! from which code, with which parameters, and what came out.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub command: &'static str,
    pub crate_version: &'static str,
    pub code_rev: String,
    /// Tiling parameters and tolerances.
    pub params: Value,
    /// Polygon count or layer sizes.
    pub summary: Value,
    pub artifact: String,
}

impl RunRecord {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            crate_version: hypertile::VERSION,
            code_rev: code_rev(),
            params,
            summary: Value::Null,
            artifact: String::new(),
        }
    }

    pub fn with_summary(mut self, summary: Value) -> Self {
        self.summary = summary;
        self
    }

    /// Write `<stem>.run.json` beside `artifact` and return its path.
    pub fn write_beside(mut self, artifact: &Path) -> Result<PathBuf> {
        self.artifact = artifact.display().to_string();
        let path = record_path(artifact);
        std::fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), "run record written");
        Ok(path)
    }
}

fn record_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("run.json")
}

/// `GIT_COMMIT` when set, else `git rev-parse HEAD`, else `"unknown"`.
pub fn code_rev() -> String {
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn record_sits_beside_the_artifact() {
        assert_eq!(
            record_path(Path::new("out/tiling_6_4.svg")),
            Path::new("out/tiling_6_4.run.json")
        );
        assert_eq!(record_path(Path::new("graph")), Path::new("graph.run.json"));
    }

    #[test]
    fn graph_run_records_params_and_layer_sizes() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("graph.json");
        fs::write(&artifact, "{}").unwrap();
        let path = RunRecord::new("graph", json!({"p": 6, "q": 4, "layers": 3}))
            .with_summary(json!({"layer_sizes": [1, 12, 72]}))
            .write_beside(&artifact)
            .unwrap();
        assert_eq!(path, dir.path().join("graph.run.json"));
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["command"], "graph");
        assert_eq!(parsed["artifact"], artifact.display().to_string());
        assert_eq!(parsed["params"]["p"], 6);
        assert_eq!(parsed["summary"]["layer_sizes"][2], 72);
        assert_eq!(parsed["crate_version"], hypertile::VERSION);
        assert!(parsed["code_rev"].as_str().is_some_and(|s| !s.is_empty()));
    }
}
