//! Permalink derivation: slugs for routed nodes, tag and category
//! aggregation paths, and the episode path rule.
use std::path::Path;

use slug::slugify;

/// Delimiter separating the sort prefix from the routable segment in a
/// content directory name, e.g. `2023-04-07---my-post`.
const DIR_DELIMITER: &str = "---";

/// Characters removed outright from episode titles before slugging.
const EPISODE_STRIP_SET: &[char] = &[
    '$', '*', '_', '+', '~', '.', '(', ')', '\'', '"', '!', '-', ':', '@',
];

/// Derive a slug from the parent directory of a source file.
///
/// The directory path is split on `---` and the second segment becomes the
/// slug: `content/posts/2023---my-post/index.md` yields `/my-post/`. Returns
/// `None` when the delimiter is absent — content layout is expected to
/// guarantee it.
pub fn from_source_dir(source_path: &Path) -> Option<String> {
    let dir = source_path.parent()?.to_string_lossy();
    let segment = dir.splitn(3, DIR_DELIMITER).nth(1)?;
    Some(format!("/{segment}/"))
}

/// Aggregation path for one tag, e.g. `/tags/tech-news/`.
pub fn tag_path(tag: &str) -> String {
    format!("/tags/{}/", slugify(tag))
}

/// Aggregation path for one category, e.g. `/categories/tech-news/`.
pub fn category_path(category: &str) -> String {
    format!("/categories/{}/", slugify(category))
}

/// Path for one podcast episode page: `/` plus the slugged title.
///
/// Titles are lowercased, the strip set removed, whitespace hyphenated and
/// anything else dropped. Distinct titles can collide (`Episode #1` and
/// `Episode 1` both land on `/episode-1`); the host is left to notice.
pub fn episode_path(title: &str) -> String {
    let mut out = String::with_capacity(title.len() + 1);
    out.push('/');
    for c in title.chars() {
        if EPISODE_STRIP_SET.contains(&c) {
            continue;
        }
        if c.is_whitespace() {
            if !out.ends_with('-') && !out.ends_with('/') {
                out.push('-');
            }
        } else if c.is_alphanumeric() {
            for lower in c.to_lowercase() {
                out.push(lower);
            }
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn directory_slug_uses_the_segment_after_the_delimiter() {
        let path = Path::new("content/posts/2023---my-post/index.md");
        assert_eq!(from_source_dir(path), Some("/my-post/".to_string()));
    }

    #[test]
    fn directory_without_delimiter_has_no_slug() {
        let path = Path::new("content/posts/my-post/index.md");
        assert_eq!(from_source_dir(path), None);
    }

    #[test]
    fn extra_delimiters_keep_the_second_segment() {
        let path = Path::new("content/posts/2023---my---post/index.md");
        assert_eq!(from_source_dir(path), Some("/my/".to_string()));
    }

    #[test]
    fn tag_and_category_paths_normalize_case_and_spacing() {
        assert_eq!(category_path("Tech News"), "/categories/tech-news/");
        assert_eq!(category_path("tech-news"), "/categories/tech-news/");
        assert_eq!(tag_path("Open Source"), "/tags/open-source/");
        assert_eq!(tag_path("open source"), "/tags/open-source/");
    }

    #[test]
    fn episode_path_strips_symbols_and_hyphenates() {
        assert_eq!(
            episode_path("Episode #1: Hello, World!"),
            "/episode-1-hello-world"
        );
    }

    #[test]
    fn episode_path_removes_the_strip_set_entirely() {
        assert_eq!(episode_path("Re-Run (again) @home"), "/rerun-again-home");
    }
}
