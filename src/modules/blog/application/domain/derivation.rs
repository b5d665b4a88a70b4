//! Rules for turning extracted document text into post fields.

use regex::Regex;
use std::sync::LazyLock;

/// A first line longer than this is not used as a title.
pub const MAX_TITLE_CHARS: usize = 99;
pub const MAX_SLUG_CHARS: usize = 50;
pub const EXCERPT_CHARS: usize = 200;

pub const FALLBACK_TITLE: &str = "Untitled";
pub const FALLBACK_SLUG: &str = "post";
pub const UPLOAD_TAGS: [&str; 2] = ["Article", "Upload"];

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9\s-]").expect("static regex"));
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));
static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("static regex"));
static VALID_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("static regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedTitle {
    pub title: String,
    /// True when the title is the first line of the text.
    pub from_text: bool,
}

fn first_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}

pub fn derive_title(text: &str, file_name: &str) -> DerivedTitle {
    if let Some(line) = first_line(text) {
        if line.chars().count() <= MAX_TITLE_CHARS {
            return DerivedTitle {
                title: line.to_string(),
                from_text: true,
            };
        }
    }

    DerivedTitle {
        title: title_from_file_name(file_name),
        from_text: false,
    }
}

pub fn title_from_file_name(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let stem = base.rsplit_once('.').map_or(base, |(stem, _ext)| stem);

    let title = stem
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title
    }
}

pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let cleaned = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUNS.replace_all(&cleaned, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");

    let truncated: String = collapsed
        .trim_matches('-')
        .chars()
        .take(MAX_SLUG_CHARS)
        .collect();
    let slug = truncated.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// `base` with a `-n` suffix, shortened so the result stays within
/// `MAX_SLUG_CHARS`.
pub fn slug_with_suffix(base: &str, n: u32) -> String {
    let suffix = format!("-{n}");
    let keep = MAX_SLUG_CHARS.saturating_sub(suffix.len());
    let head: String = base.chars().take(keep).collect();

    format!("{}{}", head.trim_end_matches('-'), suffix)
}

pub fn is_valid_slug(slug: &str) -> bool {
    VALID_SLUG.is_match(slug)
}

/// Body text (everything after the title line when the title came from the
/// text), whitespace collapsed, cut to `EXCERPT_CHARS`.
pub fn derive_excerpt(text: &str, title_from_text: bool) -> Option<String> {
    let mut lines = text.lines();
    if title_from_text {
        for line in lines.by_ref() {
            if !line.trim().is_empty() {
                break;
            }
        }
    }

    let collapsed = lines
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    if collapsed.is_empty() {
        return None;
    }

    let head: String = collapsed.chars().take(EXCERPT_CHARS).collect();
    Some(format!("{}...", head.trim()))
}

pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}

pub fn upload_tags() -> Vec<String> {
    UPLOAD_TAGS.iter().map(|t| t.to_string()).collect()
}
