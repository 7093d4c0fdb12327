//! Configuration utility functions.

use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Where a navigation or sidebar link points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget<'a> {
    /// Site-internal path, e.g. `/guide/`.
    Internal(&'a str),
    /// Absolute URL, e.g. `https://bitbucket.org`.
    External(Url),
}

/// Why a link target was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("target is empty")]
    Empty,

    #[error("protocol-relative URL `{0}` is not supported")]
    ProtocolRelative(String),

    #[error("internal path `{0}` contains whitespace")]
    Whitespace(String),

    #[error("URL `{0}` must have a valid host")]
    MissingHost(String),

    #[error("`{0}` is neither an internal path nor an absolute URL ({1})")]
    Unparsable(String, url::ParseError),
}

/// Classify a link target.
///
/// Accepts internal paths rooted at `/` and any absolute URL. URLs with a
/// network scheme (`http`, `https`, `ftp`, `ws`, `wss`) must name a host.
/// Relative paths without a leading slash are rejected: the generator
/// resolves nav links against the site root, not the current page.
///
/// # Examples
/// ```ignore
/// classify_target("/guide/")              -> Ok(Internal("/guide/"))
/// classify_target("https://todoist.com")  -> Ok(External(..))
/// classify_target("tel:+123")             -> Ok(External(..))
/// classify_target("guide/")               -> Err(Unparsable(..))
/// classify_target("//cdn.example.com")    -> Err(ProtocolRelative(..))
/// ```
pub fn classify_target(target: &str) -> Result<LinkTarget<'_>, TargetError> {
    if target.trim().is_empty() {
        return Err(TargetError::Empty);
    }

    if target.starts_with("//") {
        return Err(TargetError::ProtocolRelative(target.to_string()));
    }

    if target.starts_with('/') {
        if target.chars().any(char::is_whitespace) {
            return Err(TargetError::Whitespace(target.to_string()));
        }
        return Ok(LinkTarget::Internal(target));
    }

    let parsed =
        Url::parse(target).map_err(|e| TargetError::Unparsable(target.to_string(), e))?;
    let needs_host = NETWORK_SCHEMES.contains(&parsed.scheme());
    if needs_host && parsed.host_str().is_none_or(str::is_empty) {
        return Err(TargetError::MissingHost(target.to_string()));
    }
    Ok(LinkTarget::External(parsed))
}

/// Schemes whose URLs are meaningless without a host.
const NETWORK_SCHEMES: &[&str] = &["http", "https", "ftp", "ws", "wss"];

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`
/// Returns the path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/  ← start
/// /home/user/site/site.toml    ← found!
/// ```
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    // Absolute paths are taken as-is
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_internal_targets() {
        assert_eq!(classify_target("/"), Ok(LinkTarget::Internal("/")));
        assert_eq!(classify_target("/guide/"), Ok(LinkTarget::Internal("/guide/")));
        assert_eq!(
            classify_target("/vuejs/intro.html#setup"),
            Ok(LinkTarget::Internal("/vuejs/intro.html#setup"))
        );
    }

    #[test]
    fn test_external_targets() {
        assert!(matches!(
            classify_target("https://bitbucket.org"),
            Ok(LinkTarget::External(_))
        ));
        // Query string and encoded fragment
        assert!(matches!(
            classify_target("https://todoist.com/app?lang=fr#project%2F1780662122%2Ffull"),
            Ok(LinkTarget::External(_))
        ));
        assert!(matches!(
            classify_target("mailto:docs@example.com"),
            Ok(LinkTarget::External(_))
        ));
        // Any absolute scheme is a link the browser can follow
        assert!(matches!(
            classify_target("tel:+123"),
            Ok(LinkTarget::External(_))
        ));
        assert!(matches!(
            classify_target("ftp://files.example.com"),
            Ok(LinkTarget::External(url)) if url.host_str() == Some("files.example.com")
        ));
    }

    #[test]
    fn test_rejected_targets() {
        assert_eq!(classify_target(""), Err(TargetError::Empty));
        assert_eq!(classify_target("   "), Err(TargetError::Empty));
        assert!(matches!(
            classify_target("guide/"),
            Err(TargetError::Unparsable(..))
        ));
        assert!(matches!(
            classify_target("//cdn.example.com/lib.js"),
            Err(TargetError::ProtocolRelative(_))
        ));
        assert!(matches!(
            classify_target("/my guide/"),
            Err(TargetError::Whitespace(_))
        ));
        assert!(classify_target("https://").is_err());
        assert!(classify_target("ftp://").is_err());
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs/guide/deep");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("site.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("site.toml")).unwrap();
        assert_eq!(found, dir.path().join("site.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let dir = TempDir::new().unwrap();
        let name = Path::new("no-such-config-7f3a.toml");
        assert!(find_config_file_from(dir.path(), name).is_none());
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        assert!(find_config_file_from(dir.path(), &path).is_none());
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }
}
