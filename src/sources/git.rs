use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{GlintError, GlintResult};

use super::VcsProvider;

/// Placeholder for a branch or commit we could not read.
pub const SENTINEL: &str = "-";

const COMMIT_SUMMARY_MAX: usize = 60;

/// Version-control state of the workspace directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VcsStatus {
    pub branch: String,
    /// Short hash and subject of HEAD, at most 60 characters.
    pub last_commit: String,
    /// Added lines across unstaged and staged changes.
    pub added: u64,
    /// Removed lines across unstaged and staged changes.
    pub removed: u64,
}

impl VcsStatus {
    pub fn unavailable() -> Self {
        Self {
            branch: SENTINEL.to_string(),
            last_commit: SENTINEL.to_string(),
            added: 0,
            removed: 0,
        }
    }

    /// `main` and `master` are the branches that do not earn their own line.
    pub fn is_trunk(&self) -> bool {
        self.branch == "main" || self.branch == "master"
    }
}

impl Default for VcsStatus {
    fn default() -> Self {
        Self::unavailable()
    }
}

/// Reads status through the `git` command line.
///
/// Every invocation passes `--no-optional-locks` (and sets
/// `GIT_OPTIONAL_LOCKS=0`) so the index is never locked underneath an
/// interactive git session in the same repository.
pub struct GitCli {
    program: Option<PathBuf>,
}

impl GitCli {
    /// Locate `git` on PATH. Without it every status is the sentinel.
    pub fn detect() -> Self {
        let program = which::which("git").ok();
        if program.is_none() {
            tracing::debug!("git not found on PATH");
        }
        Self { program }
    }

    fn run(&self, dir: &Path, args: &[&str]) -> GlintResult<String> {
        let Some(program) = &self.program else {
            return Err(GlintError::Git {
                command: args.join(" "),
                stderr: "git not installed".to_string(),
            });
        };

        let output = Command::new(program)
            .arg("--no-optional-locks")
            .arg("-C")
            .arg(dir)
            .args(args)
            .env("GIT_OPTIONAL_LOCKS", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        if !output.status.success() {
            return Err(GlintError::Git {
                command: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn branch(&self, dir: &Path) -> GlintResult<String> {
        let out = self.run(dir, &["branch", "--show-current"])?;
        non_empty(out.trim())
    }

    fn last_commit(&self, dir: &Path) -> GlintResult<String> {
        let out = self.run(dir, &["log", "-1", "--format=%h %s"])?;
        let summary = non_empty(out.trim())?;
        Ok(truncate_chars(&summary, COMMIT_SUMMARY_MAX))
    }

    fn diff_stats(&self, dir: &Path) -> GlintResult<(u64, u64)> {
        let unstaged = parse_numstat(&self.run(dir, &["diff", "--numstat"])?);
        let staged = parse_numstat(&self.run(dir, &["diff", "--numstat", "--cached"])?);
        Ok((unstaged.0 + staged.0, unstaged.1 + staged.1))
    }
}

impl VcsProvider for GitCli {
    fn status(&self, dir: &Path) -> VcsStatus {
        if self.program.is_none() {
            return VcsStatus::unavailable();
        }

        let branch = self.branch(dir).unwrap_or_else(|e| {
            tracing::debug!("branch lookup: {}", e);
            SENTINEL.to_string()
        });
        let last_commit = self.last_commit(dir).unwrap_or_else(|e| {
            tracing::debug!("last commit lookup: {}", e);
            SENTINEL.to_string()
        });
        let (added, removed) = self.diff_stats(dir).unwrap_or_else(|e| {
            tracing::debug!("diff stats: {}", e);
            (0, 0)
        });

        VcsStatus {
            branch,
            last_commit,
            added,
            removed,
        }
    }
}

fn non_empty(s: &str) -> GlintResult<String> {
    if s.is_empty() {
        Err(GlintError::Git {
            command: "output".to_string(),
            stderr: "empty".to_string(),
        })
    } else {
        Ok(s.to_string())
    }
}

/// Sum the added/removed columns of `git diff --numstat` output.
/// Binary files report `-` and count as zero.
pub fn parse_numstat(output: &str) -> (u64, u64) {
    let mut added = 0u64;
    let mut removed = 0u64;
    for line in output.lines() {
        let mut parts = line.splitn(3, '\t');
        added += parts.next().and_then(|p| p.parse::<u64>().ok()).unwrap_or(0);
        removed += parts.next().and_then(|p| p.parse::<u64>().ok()).unwrap_or(0);
    }
    (added, removed)
}

/// Keep at most `max` characters (not bytes).
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_numstat_sums_columns() {
        let out = "3\t1\tsrc/main.rs\n10\t0\tREADME.md\n";
        assert_eq!(parse_numstat(out), (13, 1));
    }

    #[test]
    fn test_parse_numstat_binary_and_blank() {
        let out = "-\t-\tlogo.png\n\n2\t5\ta b.txt\n";
        assert_eq!(parse_numstat(out), (2, 5));
        assert_eq!(parse_numstat(""), (0, 0));
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        let long = "é".repeat(80);
        assert_eq!(truncate_chars(&long, 60).chars().count(), 60);
        assert_eq!(truncate_chars("abc1234 fix", 60), "abc1234 fix");
    }

    #[test]
    fn test_unavailable_is_sentinel() {
        let status = VcsStatus::unavailable();
        assert_eq!(status.branch, "-");
        assert_eq!(status.last_commit, "-");
        assert_eq!((status.added, status.removed), (0, 0));
        assert!(!status.is_trunk());
    }

    #[test]
    fn test_is_trunk() {
        let mut status = VcsStatus::unavailable();
        status.branch = "main".into();
        assert!(status.is_trunk());
        status.branch = "master".into();
        assert!(status.is_trunk());
        status.branch = "feature-x".into();
        assert!(!status.is_trunk());
    }

    #[test]
    fn test_missing_git_binary_is_unavailable() {
        let git = GitCli { program: None };
        let dir = TempDir::new().unwrap();
        assert_eq!(git.status(dir.path()), VcsStatus::unavailable());
    }

    #[test]
    fn test_outside_repository_is_unavailable() {
        let git = GitCli::detect();
        let dir = TempDir::new().unwrap();
        let status = git.status(dir.path());
        assert_eq!(status, VcsStatus::unavailable());
    }
}
