//! Placing the generated module on disk.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use astgen_syntax::schema::UnionSchema;
use tempfile::NamedTempFile;

use crate::error::RunError;

/// `<out_dir>/<base lowercased>/mod.rs`
pub fn module_path(out_dir: &Path, schema: &UnionSchema) -> PathBuf {
    out_dir.join(schema.module_dir()).join("mod.rs")
}

/// Replace `path` with `contents` in one step.
///
/// The text goes to a temporary file next to `path` which is then renamed
/// over it; on any failure the temporary file is removed and `path` is
/// untouched.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), RunError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(|source| RunError::CreateDir {
        path: dir.clone(),
        source,
    })?;

    let write_err = |source: io::Error| RunError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote module");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    UpToDate,
    Stale,
    Missing,
}

/// Compare the file at `path` with freshly generated `contents`.
pub fn check_current(path: &Path, contents: &str) -> Result<Freshness, RunError> {
    match fs::read_to_string(path) {
        Ok(existing) if normalize_newlines(&existing) == normalize_newlines(contents) => Ok(Freshness::UpToDate),
        Ok(_) => Ok(Freshness::Stale),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Freshness::Missing),
        Err(source) => Err(RunError::ReadExisting {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_syntax::schema::NodeSpec;

    fn schema(base: &str) -> UnionSchema {
        UnionSchema::new(base, vec![NodeSpec::new("Leaf", vec!["Token".into()])])
    }

    #[test]
    fn test_module_path_lowercases_base() {
        let path = module_path(Path::new("out"), &schema("CodeExpr"));
        assert_eq!(path, Path::new("out").join("codeexpr").join("mod.rs"));
    }

    #[test]
    fn test_write_creates_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = module_path(dir.path(), &schema("Expr"));

        write_atomic(&path, "first version, which is longer").unwrap();
        write_atomic(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");

        // no temporary files left behind
        let entries = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_write_into_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_atomic(&blocker.join("expr").join("mod.rs"), "x").unwrap_err();
        assert!(matches!(err, RunError::CreateDir { .. }));
    }

    #[test]
    fn test_check_current() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mod.rs");
        assert_eq!(check_current(&path, "a\nb").unwrap(), Freshness::Missing);

        fs::write(&path, "a\r\nb").unwrap();
        assert_eq!(check_current(&path, "a\nb").unwrap(), Freshness::UpToDate);
        assert_eq!(check_current(&path, "a\nc").unwrap(), Freshness::Stale);
    }
}
