//! Canonical URL resolution.
//!
//! Maps a page's relative source path to the single authoritative absolute
//! URL search engines should associate with it.
//!
//! # Path Mapping Examples
//!
//! | relative_path                | canonical URL                                  |
//! |------------------------------|------------------------------------------------|
//! | `index.md`                   | `https://example.com/`                         |
//! | `guide/index.md`             | `https://example.com/guide`                    |
//! | `guide/shell-completions.md` | `https://example.com/guide/shell-completions`  |

// ============================================================================
// Public API
// ============================================================================

/// Resolve the canonical absolute URL for a page.
///
/// Strips a trailing `index.md`/`index` segment and any `.md` suffix, then
/// joins the remainder onto `site_url` with exactly one separating slash.
/// No trailing slash is produced except for the bare site root.
///
/// Deterministic and idempotent: resolving an already-canonical path yields
/// the same URL. Total over its input; malformed paths degrade silently.
pub fn resolve(site_url: &str, relative_path: &str) -> String {
    let base = site_url.trim_end_matches('/');

    let path = relative_path.trim_start_matches('/');
    let path = strip_index_segment(path);
    let path = path.strip_suffix(".md").unwrap_or(path);
    let path = path.trim_end_matches('/');

    if path.is_empty() {
        format!("{base}/")
    } else {
        format!("{base}/{path}")
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Strip a trailing `index.md` or `index` path segment.
///
/// Whole segments only: `appendix.md` is untouched.
fn strip_index_segment(path: &str) -> &str {
    if path == "index.md" || path == "index" {
        return "";
    }
    path.strip_suffix("/index.md")
        .or_else(|| path.strip_suffix("/index"))
        .unwrap_or(path)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://example.com";

    #[test]
    fn test_resolve_home() {
        assert_eq!(resolve(SITE, "index.md"), "https://example.com/");
    }

    #[test]
    fn test_resolve_nested_page() {
        assert_eq!(
            resolve(SITE, "guide/shell-completions.md"),
            "https://example.com/guide/shell-completions"
        );
    }

    #[test]
    fn test_resolve_top_level_page() {
        assert_eq!(resolve(SITE, "changelog.md"), "https://example.com/changelog");
    }

    #[test]
    fn test_resolve_section_index() {
        assert_eq!(resolve(SITE, "guide/index.md"), "https://example.com/guide");
    }

    #[test]
    fn test_resolve_bare_index_segment() {
        assert_eq!(resolve(SITE, "index"), "https://example.com/");
        assert_eq!(resolve(SITE, "guide/index"), "https://example.com/guide");
    }

    #[test]
    fn test_resolve_keeps_index_like_names() {
        assert_eq!(resolve(SITE, "appendix.md"), "https://example.com/appendix");
        assert_eq!(
            resolve(SITE, "guide/reindex.md"),
            "https://example.com/guide/reindex"
        );
    }

    #[test]
    fn test_resolve_trailing_base_slash() {
        assert_eq!(
            resolve("https://example.com/", "guide/install.md"),
            "https://example.com/guide/install"
        );
    }

    #[test]
    fn test_resolve_idempotent() {
        let first = resolve(SITE, "guide/shell-completions.md");
        let path = first.strip_prefix("https://example.com/").unwrap();
        assert_eq!(resolve(SITE, path), first);
    }

    #[test]
    fn test_resolve_idempotent_home() {
        let first = resolve(SITE, "index.md");
        let path = first.strip_prefix("https://example.com").unwrap();
        assert_eq!(resolve(SITE, path), first);
    }

    #[test]
    fn test_resolve_empty_path() {
        assert_eq!(resolve(SITE, ""), "https://example.com/");
    }

    #[test]
    fn test_resolve_base_with_subpath() {
        assert_eq!(
            resolve("https://example.com/docs", "guide/install.md"),
            "https://example.com/docs/guide/install"
        );
    }
}
