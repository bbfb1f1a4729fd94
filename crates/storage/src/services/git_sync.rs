use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;
use tracing::{info, warn};
use utoipa::ToSchema;

/// Result of pushing the ledger file to the remote repository. Failures are
/// reported as a message and never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GitSyncOutcome {
    pub success: bool,
    pub message: String,
}

/// Stages, commits and pushes one file from the working tree it lives in.
#[derive(Debug, Clone)]
pub struct GitSync {
    file: PathBuf,
}

impl GitSync {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    pub fn commit_message(user_name: &str) -> String {
        format!("Add/update predictions for {}", user_name)
    }

    pub fn commit_and_push(&self, user_name: &str) -> GitSyncOutcome {
        let (dir, file_name) = match (self.file.parent(), self.file.file_name()) {
            (Some(dir), Some(name)) => (dir, Path::new(name)),
            _ => {
                return GitSyncOutcome {
                    success: false,
                    message: format!("Invalid ledger path: {}", self.file.display()),
                };
            }
        };
        let dir = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        };

        let message = Self::commit_message(user_name);
        let steps: [(&str, Vec<&OsStr>); 3] = [
            ("add", vec![OsStr::new("add"), file_name.as_os_str()]),
            ("commit", vec![OsStr::new("commit"), OsStr::new("-m"), OsStr::new(&message)]),
            ("push", vec![OsStr::new("push")]),
        ];

        for (step, args) in steps {
            if let Err(reason) = run_git(dir, &args) {
                warn!("git {} failed: {}", step, reason);
                return GitSyncOutcome {
                    success: false,
                    message: format!("Error committing to GitHub: git {} failed: {}", step, reason),
                };
            }
        }

        info!("Committed and pushed {} for '{}'", self.file.display(), user_name);
        GitSyncOutcome {
            success: true,
            message: "Successfully committed to GitHub!".to_string(),
        }
    }
}

fn run_git(dir: &Path, args: &[&OsStr]) -> Result<(), String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| e.to_string())?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(format!("{} ({})", stderr.trim(), output.status))
    }
}
