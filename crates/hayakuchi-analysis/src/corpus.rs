use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use walkdir::WalkDir;

/// File extensions recognized as subtitle transcripts.
pub const SUBTITLE_EXTENSIONS: [&str; 2] = ["srt", "ass"];

/// Directory name holding superseded subtitle copies; excluded by default so
/// the same episode is not counted twice.
pub const BACKUP_DIR_NAME: &str = "SubtitleBackup";

/// Whether a path has a recognized subtitle extension (case-insensitive).
#[must_use]
pub fn is_subtitle_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SUBTITLE_EXTENSIONS.contains(&ext.as_str()))
}

/// Recursively discovers show directories under `root`.
///
/// A show directory is any directory directly containing at least one
/// subtitle file. With `exclude_backup`, files with a [`BACKUP_DIR_NAME`]
/// path component are ignored, so a backup folder never becomes a show.
/// Unreadable directory entries are skipped; one bad entry must not abort a
/// corpus scan. The result is sorted by path.
#[must_use]
pub fn collect_show_dirs(root: &Path, exclude_backup: bool) -> Vec<PathBuf> {
    let mut dirs = BTreeSet::new();
    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        let path = entry.path();
        if !entry.file_type().is_file() || !is_subtitle_file(path) {
            continue;
        }
        if exclude_backup
            && path
                .components()
                .any(|component| component.as_os_str() == BACKUP_DIR_NAME)
        {
            continue;
        }
        if let Some(parent) = path.parent() {
            dirs.insert(parent.to_path_buf());
        }
    }
    dirs.into_iter().collect()
}

/// Lists the subtitle files directly inside a show directory, sorted by
/// name.
pub fn list_episode_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = dir
        .read_dir()?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_subtitle_file(path))
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn recognizes_extensions_case_insensitively() {
        assert!(is_subtitle_file(Path::new("ep01.srt")));
        assert!(is_subtitle_file(Path::new("ep01.ASS")));
        assert!(!is_subtitle_file(Path::new("ep01.txt")));
        assert!(!is_subtitle_file(Path::new("no_extension")));
    }

    #[test]
    fn groups_files_by_parent_directory() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("show_a/ep01.srt"));
        touch(&root.path().join("show_a/ep02.srt"));
        touch(&root.path().join("show_b/season1/ep01.ass"));
        touch(&root.path().join("notes/readme.txt"));

        let dirs = collect_show_dirs(root.path(), true);
        assert_eq!(
            dirs,
            vec![
                root.path().join("show_a"),
                root.path().join("show_b/season1"),
            ]
        );
    }

    #[test]
    fn backup_folders_are_excluded_by_default() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("show_a/ep01.srt"));
        touch(&root.path().join("SubtitleBackup/show_a/ep01.srt"));

        let excluded = collect_show_dirs(root.path(), true);
        assert_eq!(excluded, vec![root.path().join("show_a")]);

        let included = collect_show_dirs(root.path(), false);
        assert_eq!(included.len(), 2);
    }

    #[test]
    fn directories_without_subtitles_produce_no_shows() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("empty_show/notes.txt"));
        assert!(collect_show_dirs(root.path(), true).is_empty());
    }

    #[test]
    fn episode_files_are_sorted_and_filtered() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("show/ep02.srt"));
        touch(&root.path().join("show/ep01.ass"));
        touch(&root.path().join("show/cover.jpg"));

        let files = list_episode_files(&root.path().join("show")).unwrap();
        assert_eq!(
            files,
            vec![
                root.path().join("show/ep01.ass"),
                root.path().join("show/ep02.srt"),
            ]
        );
    }
}
