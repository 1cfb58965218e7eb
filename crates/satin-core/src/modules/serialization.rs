use std::ffi::OsString;
use std::io::{self, Write};
use std::path::Path;
use tempfile::Builder;

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

/// Stages `content` in a uniquely named `.{name}.*.partial` sibling, then
/// renames it onto `path`. Every call owns its staging file; the staging file
/// is removed if the rename fails.
pub fn write_text_artifact_atomic(path: &Path, content: &str) -> io::Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' does not name a file", path.display()),
        )
    })?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut prefix = OsString::from(".");
    prefix.push(file_name);
    prefix.push(".");
    let mut staging = Builder::new()
        .prefix(&prefix)
        .suffix(".partial")
        .tempfile_in(directory)?;
    staging.write_all(normalize_text_artifact(content).as_bytes())?;
    staging.persist(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{normalize_text_artifact, write_text_artifact_atomic};
    use std::fs;
    use std::path::Path;
    use std::sync::Barrier;
    use tempfile::TempDir;

    fn staging_leftovers(directory: &Path, file_name: &str) -> Vec<String> {
        let prefix = format!(".{file_name}.");
        fs::read_dir(directory)
            .expect("directory should be listable")
            .map(|entry| {
                entry
                    .expect("entry should be readable")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .filter(|name| name.starts_with(&prefix))
            .collect()
    }

    #[test]
    fn normalize_text_artifact_uses_canonical_line_endings() {
        let normalized = normalize_text_artifact("alpha\r\nbeta\rgamma");
        assert_eq!(normalized, "alpha\nbeta\ngamma\n");
    }

    #[test]
    fn repeated_text_writes_produce_identical_bytes() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("pimb.out");
        let input = "line 1\r\nline 2\rline 3";

        write_text_artifact_atomic(&path, input).expect("first write should succeed");
        let first = fs::read(&path).expect("artifact should be readable");

        write_text_artifact_atomic(&path, input).expect("second write should succeed");
        let second = fs::read(&path).expect("artifact should be readable");

        assert_eq!(first, second);
        assert_eq!(second, b"line 1\nline 2\nline 3\n");
        assert!(staging_leftovers(temp.path(), "pimb.out").is_empty());
    }

    #[test]
    fn failed_rename_leaves_no_partial_file() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("pibad.out");
        fs::create_dir_all(path.join("occupied")).expect("blocking directory should exist");

        write_text_artifact_atomic(&path, "rows\n").expect_err("rename onto directory must fail");

        assert!(path.is_dir(), "existing directory must be untouched");
        assert!(staging_leftovers(temp.path(), "pibad.out").is_empty());
    }

    #[test]
    fn concurrent_writers_of_one_path_never_collide() {
        const WRITERS: usize = 8;
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("pimb.out");
        let contents: Vec<String> = (0..WRITERS)
            .map(|writer| format!("writer {writer}\n"))
            .collect();

        for _ in 0..25 {
            let barrier = Barrier::new(WRITERS);
            let failures: Vec<String> = std::thread::scope(|scope| {
                let handles: Vec<_> = contents
                    .iter()
                    .map(|content| {
                        let (barrier, path) = (&barrier, &path);
                        scope.spawn(move || {
                            barrier.wait();
                            write_text_artifact_atomic(path, content)
                        })
                    })
                    .collect();
                handles
                    .into_iter()
                    .filter_map(|handle| handle.join().expect("writer thread").err())
                    .map(|error| error.to_string())
                    .collect()
            });

            assert!(failures.is_empty(), "concurrent writes failed: {failures:?}");
            let written = fs::read_to_string(&path).expect("artifact should be readable");
            assert!(contents.contains(&written), "torn artifact: {written:?}");
        }

        assert!(staging_leftovers(temp.path(), "pimb.out").is_empty());
    }
}
