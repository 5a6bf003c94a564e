//! Keeps every source file paired with a unit test file under tests/unit

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Module declaration and entry point files carry no logic of their own
    fn is_structural(relative: &str) -> bool {
        let name = relative.rsplit('/').next().unwrap_or(relative);
        relative == "lib.rs" || name == "main.rs" || name == "mod.rs"
    }

    fn rust_files(dir: &Path, base: &Path, found: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                rust_files(&path, base, found)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(|_| io::Error::other("path outside scanned directory"))?;
                found.insert(relative.to_string_lossy().replace('\\', "/"));
            }
        }
        Ok(())
    }

    fn logic_files(root: &str) -> BTreeSet<String> {
        let base = Path::new(root);
        let mut found = BTreeSet::new();
        if let Err(error) = rust_files(base, base, &mut found) {
            assert!(!base.exists(), "Failed to scan {root}: {error}");
        }
        found.retain(|relative| !is_structural(relative));
        found
    }

    // Tests each source file has a unit test at the mirrored path
    // Verified by deleting tests/unit/terrain/region.rs
    #[test]
    fn test_every_source_file_has_unit_tests() {
        let tested = logic_files(UNIT_DIR);
        let missing: Vec<_> = logic_files(SRC_DIR)
            .into_iter()
            .filter(|relative| !tested.contains(relative))
            .map(|relative| format!("  - src/{relative} -> tests/unit/{relative}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by adding tests/unit/terrain/orphan.rs
    #[test]
    fn test_every_unit_test_has_source() {
        let sources = logic_files(SRC_DIR);
        let orphaned: Vec<_> = logic_files(UNIT_DIR)
            .into_iter()
            .filter(|relative| !sources.contains(relative))
            .map(|relative| format!("  - tests/unit/{relative} (no src/{relative})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without sources:\n{}",
            orphaned.join("\n")
        );
    }

    // Tests every test file declares at least one test
    // Verified by emptying tests/unit/render/color.rs
    #[test]
    fn test_every_test_file_has_tests() {
        let empty: Vec<_> = logic_files("tests")
            .into_iter()
            .filter(|relative| {
                fs::read_to_string(Path::new("tests").join(relative))
                    .map_or(true, |content| !content.contains("#[test]"))
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without #[test] functions:\n{}",
            empty.join("\n")
        );
    }
}
