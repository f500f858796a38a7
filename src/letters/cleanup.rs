//! Removes generated cover letters past a retention age

use crate::error::Result;
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Outcome of a cleanup pass. In a dry run `removed` lists the files that
/// would have been deleted.
#[derive(Debug)]
pub struct CleanupReport {
    pub total_files: usize,
    pub removed: Vec<PathBuf>,
    pub dry_run: bool,
}

/// Delete cover letters older than `days_old` days from `dir`. A dry run
/// only reports; `--force` semantics are the caller's.
pub async fn cleanup_cover_letters(dir: &Path, days_old: u64, dry_run: bool) -> Result<CleanupReport> {
    let cutoff = SystemTime::now() - Duration::from_secs(days_old * SECONDS_PER_DAY);
    prune_before(dir, cutoff, dry_run).await
}

/// Age-based pruning against an explicit cutoff. Files modified before the
/// cutoff are removed (or listed, in a dry run); subdirectories are skipped.
pub async fn prune_before(dir: &Path, cutoff: SystemTime, dry_run: bool) -> Result<CleanupReport> {
    let mut report = CleanupReport {
        total_files: 0,
        removed: Vec::new(),
        dry_run,
    };

    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let metadata = entry.metadata().await?;

        if metadata.is_dir() {
            continue;
        }
        report.total_files += 1;

        let modified = match metadata.modified() {
            Ok(time) => time,
            Err(e) => {
                error!("Could not read modification time of {}: {}", path.display(), e);
                continue;
            }
        };

        if modified >= cutoff {
            continue;
        }

        if dry_run {
            report.removed.push(path);
        } else {
            match tokio::fs::remove_file(&path).await {
                Ok(()) => report.removed.push(path),
                Err(e) => error!("Error deleting {}: {}", path.display(), e),
            }
        }
    }

    info!(
        "Cleanup scanned {} files, {} {}",
        report.total_files,
        report.removed.len(),
        if dry_run { "would be deleted" } else { "deleted" }
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        std::fs::write(path, "letter").unwrap();
    }

    #[tokio::test]
    async fn test_dry_run_deletes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("old_letter.txt"));

        let cutoff = SystemTime::now() + Duration::from_secs(60);
        let report = prune_before(dir.path(), cutoff, true).await.unwrap();

        assert!(report.dry_run);
        assert_eq!(report.total_files, 1);
        assert_eq!(report.removed.len(), 1);
        assert!(dir.path().join("old_letter.txt").exists());
    }

    #[tokio::test]
    async fn test_force_removes_only_files_past_cutoff() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("recent_letter.txt"));

        // Everything on disk is newer than a cutoff in the past
        let cutoff = SystemTime::now() - Duration::from_secs(3600);
        let report = prune_before(dir.path(), cutoff, false).await.unwrap();

        assert_eq!(report.total_files, 1);
        assert!(report.removed.is_empty());
        assert!(dir.path().join("recent_letter.txt").exists());

        // A cutoff in the future makes the same file eligible
        let cutoff = SystemTime::now() + Duration::from_secs(3600);
        let report = prune_before(dir.path(), cutoff, false).await.unwrap();

        assert_eq!(report.removed.len(), 1);
        assert!(!dir.path().join("recent_letter.txt").exists());
    }

    #[tokio::test]
    async fn test_subdirectories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("archive")).unwrap();
        touch(&dir.path().join("letter.txt"));

        let cutoff = SystemTime::now() + Duration::from_secs(60);
        let report = prune_before(dir.path(), cutoff, false).await.unwrap();

        assert_eq!(report.total_files, 1);
        assert!(dir.path().join("archive").exists());
    }
}
