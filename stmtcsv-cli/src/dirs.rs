use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Fail unless `path` is an existing directory.
pub fn require_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        bail!("\"{}\" is not a directory.", path.display());
    }
    Ok(())
}

/// Create `path` if it is missing; fail if it exists as something else.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path).with_context(|| format!("create {}", path.display()))?;
        log::info!("Created {}", path.display());
    } else if !path.is_dir() {
        bail!("\"{}\" is not a directory.", path.display());
    }
    Ok(())
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// PDF files directly inside `input`, sorted by path. Finding none is an error.
pub fn find_statement_files(input: &Path) -> Result<Vec<PathBuf>> {
    let mut statements = Vec::new();

    for entry in fs::read_dir(input).with_context(|| format!("read {}", input.display()))? {
        let path = entry.with_context(|| format!("read {}", input.display()))?.path();
        if path.is_file() && is_pdf(&path) {
            statements.push(path);
        }
    }

    if statements.is_empty() {
        bail!("Did not find any PDF files in \"{}\".", input.display());
    }

    statements.sort();
    Ok(statements)
}

/// Move each statement into `archive`, keeping its file name.
pub fn archive_statements(statements: &[PathBuf], archive: &Path) -> Result<usize> {
    for path in statements {
        let file_name = path
            .file_name()
            .with_context(|| format!("no file name in {}", path.display()))?;
        let target = archive.join(file_name);
        fs::rename(path, &target)
            .with_context(|| format!("move {} to {}", path.display(), target.display()))?;
        log::info!("Archived {} to {}", path.display(), target.display());
    }
    Ok(statements.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_statement_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.PDF", "a.pdf", "notes.txt", "c.Pdf", "pdf"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let found: Vec<_> = find_statement_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(found, vec!["a.pdf", "b.PDF", "c.Pdf"]);
    }

    #[test]
    fn test_find_statement_files_empty_is_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), "x").unwrap();

        let err = find_statement_files(dir.path()).unwrap_err();
        assert!(err.to_string().starts_with("Did not find any PDF files in"));
    }

    #[test]
    fn test_ensure_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out");
        ensure_dir(&out).unwrap();
        assert!(out.is_dir());
        ensure_dir(&out).unwrap();

        let file = dir.path().join("file");
        fs::write(&file, "x").unwrap();
        let err = ensure_dir(&file).unwrap_err();
        assert!(err.to_string().ends_with("is not a directory."));
        assert!(require_dir(&file).is_err());
        assert!(require_dir(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_archive_statements() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("archive");
        fs::create_dir(&archive).unwrap();
        let pdf = dir.path().join("jan.pdf");
        fs::write(&pdf, "x").unwrap();

        assert_eq!(archive_statements(&[pdf.clone()], &archive).unwrap(), 1);
        assert!(!pdf.exists());
        assert!(archive.join("jan.pdf").exists());
    }
}
