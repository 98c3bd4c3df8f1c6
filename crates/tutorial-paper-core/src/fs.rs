use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::PaperResult;

/// Replace `path` with `content`, writing through a sibling temporary file.
///
/// The temporary file is removed whenever writing or renaming it fails.
pub fn write_output(path: &Path, content: &str) -> PaperResult<()> {
    let tmp_path = unique_tmp_path(path);
    let written = write_tmp(&tmp_path, content).and_then(|()| fs::rename(&tmp_path, path));

    if let Err(err) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.into());
    }

    Ok(())
}

fn write_tmp(tmp_path: &Path, content: &str) -> io::Result<()> {
    let mut file = File::create(tmp_path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

fn unique_tmp_path(path: &Path) -> PathBuf {
    let mut counter = 0u32;
    loop {
        let candidate = if counter == 0 {
            path.with_extension("tmp")
        } else {
            path.with_extension(format!("tmp{counter}"))
        };

        if !candidate.exists() {
            return candidate;
        }

        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("article.md");
        fs::write(&file_path, "old").unwrap();

        write_output(&file_path, "new").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");
        assert!(!file_path.with_extension("tmp").exists());
    }

    #[test]
    fn failed_write_leaves_no_temporary_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("article.md");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "occupied").unwrap();

        let err = write_output(&target, "new").unwrap_err();

        assert!(matches!(err, crate::error::PaperError::Io(_)));
        assert!(!target.with_extension("tmp").exists());
        assert!(target.is_dir());
    }

    #[test]
    fn skips_taken_temporary_names() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("references.bib");
        fs::write(file_path.with_extension("tmp"), "someone else's").unwrap();

        write_output(&file_path, "entries").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "entries");
        assert_eq!(
            fs::read_to_string(file_path.with_extension("tmp")).unwrap(),
            "someone else's"
        );
    }
}
