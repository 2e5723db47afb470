//! One-time generation of the static root and its placeholder pages.

use crate::error::FatalError;
use crate::logger;
use std::fs;
use std::path::Path;

pub const INDEX_PAGE: &str = r#"<!DOCTYPE html>

<html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>Document</title>
    </head>

    <body>
        <nav>
            <a href="/index.html">Home</a> |
            <a href="/contacts.html">Contacts</a>
        </nav>

        <h1>Hello, world!</h1>
    </body>
</html>
"#;

pub const CONTACTS_PAGE: &str = r#"<!DOCTYPE html>

<html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>Document</title>
    </head>

    <body>
        <nav>
            <a href="/index.html">Home</a> |
            <a href="/contacts.html">Contacts</a>
        </nav>

        <h1>Contact list:</h1>

        <ul>
            <li>Contact 1</li>
            <li>Contact 2</li>
            <li>Contact 3</li>
            <li>Contact 4</li>
            <li>Contact 5</li>
        </ul>
    </body>
</html>
"#;

/// Make sure the static root exists before the listener is bound.
///
/// An existing directory is left untouched. A missing one is either
/// created and populated with the two placeholder pages, or reported as
/// `FatalError::MissingRoot` when bootstrapping is disabled.
pub fn ensure_static_root(root: &Path, bootstrap_if_missing: bool) -> Result<(), FatalError> {
    if root.is_dir() {
        return Ok(());
    }

    if !bootstrap_if_missing {
        return Err(FatalError::MissingRoot(root.to_path_buf()));
    }

    let fail = |source| FatalError::Bootstrap {
        path: root.to_path_buf(),
        source,
    };

    fs::create_dir_all(root).map_err(fail)?;
    fs::write(root.join("index.html"), INDEX_PAGE).map_err(fail)?;
    fs::write(root.join("contacts.html"), CONTACTS_PAGE).map_err(fail)?;

    logger::log_bootstrap(root);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FatalError;
    use tempdir::TempDir;

    #[test]
    fn bootstrap_creates_root_with_exactly_two_pages() {
        let tmp = TempDir::new("bootstrap").unwrap();
        let root = tmp.path().join("wwwroot");

        ensure_static_root(&root, true).unwrap();

        assert!(root.is_dir());
        let mut names: Vec<_> = fs::read_dir(&root)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        assert_eq!(names, vec!["contacts.html", "index.html"]);

        let index = fs::read_to_string(root.join("index.html")).unwrap();
        assert!(index.contains("Hello, world!"));

        let contacts = fs::read_to_string(root.join("contacts.html")).unwrap();
        for n in 1..=5 {
            assert!(contacts.contains(&format!("Contact {n}")));
        }
    }

    #[test]
    fn missing_root_with_bootstrap_disabled_is_fatal() {
        let tmp = TempDir::new("bootstrap").unwrap();
        let root = tmp.path().join("absent");

        let err = ensure_static_root(&root, false).unwrap_err();
        assert!(matches!(err, FatalError::MissingRoot(_)));
        assert!(!root.exists());
    }

    #[test]
    fn existing_root_is_left_untouched() {
        let tmp = TempDir::new("bootstrap").unwrap();
        let root = tmp.path().join("wwwroot");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("custom.html"), "<p>mine</p>").unwrap();

        ensure_static_root(&root, true).unwrap();

        assert!(root.join("custom.html").exists());
        assert!(!root.join("index.html").exists());
    }
}
