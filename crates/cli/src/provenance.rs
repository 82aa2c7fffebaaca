//! `<stem>.provenance.json` sidecars next to every CLI artifact.
//!
//! A sidecar records how the artifact was made (code revision, library
//! version, callsite, parameters) and what came out of it (`outcome`: the
//! triangulation status, inside/outside counts or method disagreements).

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Inputs and results of one command run.
#[derive(Debug, Default)]
pub struct Payload {
    pub params: Value,
    pub outcome: Value,
    pub tags: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn with_outcome(mut self, outcome: Value) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn with_tag(mut self, tag: Option<&str>) -> Self {
        self.tags.extend(tag.map(str::to_owned));
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    code_rev: String,
    pinpoly: &'static str,
    callsite: Callsite,
    tags: &'a [String],
    params: &'a Value,
    outcome: &'a Value,
    outputs: [String; 1],
}

/// Write the sidecar for `artifact` and return its path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let caller = Location::caller();
    let sidecar = Sidecar {
        code_rev: current_git_rev(),
        pinpoly: pinpoly::VERSION,
        callsite: Callsite {
            file: caller.file(),
            line: caller.line(),
        },
        tags: &payload.tags,
        params: &payload.params,
        outcome: &payload.outcome,
        outputs: [artifact.display().to_string()],
    };
    let path = sidecar_path(artifact);
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance_written");
    Ok(path)
}

/// `out/poly.json` -> `out/poly.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact.file_stem().and_then(|s| s.to_str()).unwrap_or("artifact");
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_owned)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_owned())
        })
        .unwrap_or_else(|| "unknown".to_owned())
}
