//! Fixture file loading.

use std::fs;
use std::path::Path;

use crate::errors::{FixtureError, FixtureResult};
use crate::fixture::FixtureFile;

/// Load a single fixture file.
pub fn load_fixture(path: &Path) -> FixtureResult<FixtureFile> {
    let content = fs::read_to_string(path).map_err(|e| FixtureError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let file: FixtureFile = toml::from_str(&content).map_err(|e| FixtureError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    validate(path, &file)?;
    Ok(file)
}

fn validate(path: &Path, file: &FixtureFile) -> FixtureResult<()> {
    for case in &file.cases {
        if case.name.trim().is_empty() {
            return Err(FixtureError::Case {
                path: path.display().to_string(),
                message: "case with empty name".to_string(),
            });
        }
        if case.text.trim().is_empty() {
            return Err(FixtureError::Case {
                path: path.display().to_string(),
                message: format!("case {:?} has empty text", case.name),
            });
        }
    }
    Ok(())
}

/// Load all fixtures from a directory (glob: **/*.toml), sorted by relative
/// path so runs are deterministic.
pub fn load_all_fixtures(dir: &Path) -> FixtureResult<Vec<(String, FixtureFile)>> {
    let mut fixtures = Vec::new();
    load_fixtures_recursive(dir, dir, &mut fixtures)?;
    fixtures.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(fixtures)
}

fn load_fixtures_recursive(
    base: &Path,
    dir: &Path,
    fixtures: &mut Vec<(String, FixtureFile)>,
) -> FixtureResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| FixtureError::Read {
        path: dir.display().to_string(),
        message: e.to_string(),
    })? {
        let entry = entry.map_err(|e| FixtureError::Read {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();

        if path.is_dir() {
            load_fixtures_recursive(base, &path, fixtures)?;
        } else if path.extension().map_or(false, |e| e == "toml") {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let fixture = load_fixture(&path)?;
            fixtures.push((relative.display().to_string(), fixture));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn fixture_files_load_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cases.toml");
        fs::write(
            &path,
            r#"
            [[case]]
            name = "superiority"
            text = "DrugX was superior to DrugY."
            "#,
        )
        .unwrap();

        let file = load_fixture(&path).unwrap();
        assert_eq!(file.cases.len(), 1);
        assert_eq!(file.cases[0].name, "superiority");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[case]\nname = ").unwrap();

        match load_fixture(&path) {
            Err(FixtureError::Parse { .. }) => {}
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn blank_case_names_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cases.toml");
        fs::write(
            &path,
            r#"
            [[case]]
            name = "  "
            text = "DrugX was superior to DrugY."
            "#,
        )
        .unwrap();

        match load_fixture(&path) {
            Err(FixtureError::Case { .. }) => {}
            other => panic!("expected a case error, got {:?}", other),
        }
    }

    #[test]
    fn directories_walk_recursively_in_sorted_order() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        let case = r#"
            [[case]]
            name = "c"
            text = "DrugX was superior to DrugY."
        "#;
        fs::write(dir.path().join("b.toml"), case).unwrap();
        fs::write(dir.path().join("nested").join("a.toml"), case).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let fixtures = load_all_fixtures(dir.path()).unwrap();
        let names: Vec<&str> = fixtures.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["b.toml", "nested/a.toml"]);
    }

    #[test]
    fn missing_directories_load_empty() {
        let dir = tempdir().unwrap();
        let fixtures = load_all_fixtures(&dir.path().join("absent")).unwrap();
        assert!(fixtures.is_empty());
    }
}
