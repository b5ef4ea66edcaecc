//! Breadcrumb trail derivation.
//!
//! Builds the ordered Home → … → current-page navigation trail from a
//! page's relative path segments. One crumb per segment, with display names
//! derived from the segment text.
//!
//! # Display Name Examples
//!
//! | segment             | display name        |
//! |---------------------|---------------------|
//! | `guide`             | `Guide`             |
//! | `shell-completions` | `Shell Completions` |

use super::url;
use serde::Serialize;

// ============================================================================
// Breadcrumb Trail
// ============================================================================

/// A single entry in a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// 1-based position in the trail (Home is always 1).
    pub position: usize,
    /// Human-readable display name.
    pub name: String,
    /// Absolute URL of the trail entry.
    pub url: String,
}

/// Build the breadcrumb trail for a page.
///
/// Home occupies position 1 and points at the site root; each path segment
/// contributes one crumb at position `index + 2`. The terminal crumb's URL
/// is forced to `canonical_url` so the trail always ends on the page's own
/// canonical identity, even where prefix accumulation would diverge.
///
/// The home page yields a single-element trail. Empty segments contribute
/// no crumb (tolerant handling of malformed paths).
pub fn build(site_url: &str, relative_path: &str, canonical_url: &str) -> Vec<Crumb> {
    let mut trail = vec![Crumb {
        position: 1,
        name: "Home".to_string(),
        url: url::resolve(site_url, "index.md"),
    }];

    if relative_path == "index.md" {
        return trail;
    }

    let base = site_url.trim_end_matches('/');
    let path = relative_path.strip_suffix(".md").unwrap_or(relative_path);
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut prefix = String::with_capacity(path.len());
    for (i, segment) in segments.iter().enumerate() {
        if !prefix.is_empty() {
            prefix.push('/');
        }
        prefix.push_str(segment);

        // Intermediate crumbs link to the accumulated prefix; the final
        // crumb must match the page's canonical URL exactly.
        let url = if i + 1 == segments.len() {
            canonical_url.to_string()
        } else {
            format!("{base}/{prefix}")
        };

        trail.push(Crumb {
            position: i + 2,
            name: display_name(segment),
            url,
        });
    }

    trail
}

/// Derive a human-readable display name from a path segment.
///
/// Splits on `-` and capitalizes each word: `shell-completions` →
/// `Shell Completions`.
pub(crate) fn display_name(segment: &str) -> String {
    segment
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Uppercase the first character of a word.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SITE: &str = "https://example.com";

    fn canonical(relative_path: &str) -> String {
        url::resolve(SITE, relative_path)
    }

    #[test]
    fn test_home_single_entry() {
        let trail = build(SITE, "index.md", &canonical("index.md"));

        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].position, 1);
        assert_eq!(trail[0].name, "Home");
        assert_eq!(trail[0].url, "https://example.com/");
    }

    #[test]
    fn test_nested_page_trail() {
        let canonical = canonical("guide/shell-completions.md");
        let trail = build(SITE, "guide/shell-completions.md", &canonical);

        assert_eq!(trail.len(), 3);
        assert_eq!(trail[0].position, 1);
        assert_eq!(trail[0].name, "Home");
        assert_eq!(trail[0].url, "https://example.com/");
        assert_eq!(trail[1].position, 2);
        assert_eq!(trail[1].name, "Guide");
        assert_eq!(trail[1].url, "https://example.com/guide");
        assert_eq!(trail[2].position, 3);
        assert_eq!(trail[2].name, "Shell Completions");
        assert_eq!(trail[2].url, "https://example.com/guide/shell-completions");
    }

    #[test]
    fn test_top_level_page_trail() {
        let canonical = canonical("changelog.md");
        let trail = build(SITE, "changelog.md", &canonical);

        assert_eq!(trail.len(), 2);
        assert_eq!(trail[1].name, "Changelog");
        assert_eq!(trail[1].url, "https://example.com/changelog");
    }

    #[test]
    fn test_terminal_url_equals_canonical() {
        for path in [
            "changelog.md",
            "guide/index.md",
            "guide/shell-completions.md",
            "reference/cli/flags.md",
        ] {
            let canonical = canonical(path);
            let trail = build(SITE, path, &canonical);
            assert_eq!(trail.last().unwrap().url, canonical, "path: {path}");
        }
    }

    #[test]
    fn test_section_index_terminal_link() {
        // Prefix accumulation would give ".../guide/index"; the terminal
        // crumb must still carry the canonical ".../guide".
        let canonical = canonical("guide/index.md");
        let trail = build(SITE, "guide/index.md", &canonical);

        assert_eq!(trail.len(), 3);
        assert_eq!(trail[2].name, "Index");
        assert_eq!(trail[2].url, "https://example.com/guide");
    }

    #[test]
    fn test_positions_strictly_increasing() {
        let canonical = canonical("reference/cli/flags.md");
        let trail = build(SITE, "reference/cli/flags.md", &canonical);

        assert_eq!(trail.len(), 4);
        for (i, crumb) in trail.iter().enumerate() {
            assert_eq!(crumb.position, i + 1);
        }
    }

    #[test]
    fn test_length_law() {
        for (path, segments) in [
            ("a.md", 1),
            ("a/b.md", 2),
            ("a/b/c.md", 3),
            ("a/b/c/d.md", 4),
        ] {
            let canonical = canonical(path);
            let trail = build(SITE, path, &canonical);
            assert_eq!(trail.len(), segments + 1, "path: {path}");
        }
    }

    #[test]
    fn test_empty_segments_skipped() {
        let canonical = canonical("guide//install.md");
        let trail = build(SITE, "guide//install.md", &canonical);

        assert_eq!(trail.len(), 3);
        assert_eq!(trail[1].name, "Guide");
        assert_eq!(trail[2].name, "Install");
    }

    #[test]
    fn test_degenerate_path_root_only() {
        let trail = build(SITE, "", &canonical(""));

        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].name, "Home");
    }

    #[test]
    fn test_display_name_single_word() {
        assert_eq!(display_name("guide"), "Guide");
    }

    #[test]
    fn test_display_name_hyphenated() {
        assert_eq!(display_name("shell-completions"), "Shell Completions");
        assert_eq!(display_name("getting-started-fast"), "Getting Started Fast");
    }

    #[test]
    fn test_display_name_preserves_inner_case() {
        assert_eq!(display_name("faq"), "Faq");
        assert_eq!(display_name("API"), "API");
    }

    #[test]
    fn test_display_name_empty() {
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_capitalize_unicode() {
        assert_eq!(display_name("über-uns"), "Über Uns");
    }
}
