//! Solver discovery.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Discovers solver executables: every regular file in `dir`, sorted by
/// path. On Unix, files without an execute bit are made executable so that
/// compiled solvers dropped into the directory just work.
pub fn discover_solvers(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("reading solvers directory {}", dir.display()))?;

    let mut solvers = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            solvers.push(entry.path());
        }
    }
    solvers.sort();

    if solvers.is_empty() {
        bail!("no solvers found in {}", dir.display());
    }

    #[cfg(unix)]
    for solver in &solvers {
        ensure_executable(solver)?;
    }

    Ok(solvers)
}

#[cfg(unix)]
fn ensure_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)
        .with_context(|| format!("inspecting solver {}", path.display()))?
        .permissions();
    if permissions.mode() & 0o111 == 0 {
        permissions.set_mode(0o755);
        fs::set_permissions(path, permissions)
            .with_context(|| format!("marking solver {} executable", path.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discovery_sorted_files_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b_solver"), "#!/bin/sh\n").unwrap();
        fs::write(dir.path().join("a_solver"), "#!/bin/sh\n").unwrap();
        fs::create_dir(dir.path().join("not_a_solver")).unwrap();

        let solvers = discover_solvers(dir.path()).unwrap();
        let names: Vec<_> = solvers
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a_solver", "b_solver"]);
    }

    #[test]
    fn test_empty_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(discover_solvers(dir.path()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_discovery_sets_execute_bit() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("solver");
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        discover_solvers(dir.path()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0);
    }
}
