//! Normalization and resolution of free-text annotations.

use crate::model::NamespaceIndex;

/// Corrects the indentation of an embedded multi-line comment.
///
/// Source comments keep the leading whitespace of their declaration site.
/// This strips the minimum leading-space count found among lines that
/// contain at least one non-whitespace character; empty and all-whitespace
/// lines are excluded from the minimum. Lines with fewer leading spaces than
/// the minimum pass through unchanged.
///
/// The function is idempotent: once the common indentation is gone, the
/// minimum is zero and further applications are no-ops.
pub fn normalize_indent(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();

    let min_leading_spaces = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| leading_spaces(line))
        .min()
        .unwrap_or(0);

    if min_leading_spaces == 0 {
        return text.to_string();
    }

    lines
        .iter()
        .map(|line| {
            if leading_spaces(line) >= min_leading_spaces {
                &line[min_leading_spaces..]
            } else {
                line
            }
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

fn leading_spaces(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ').count()
}

/// Resolves a "see also" annotation into cross-links.
///
/// The raw annotation is a whitespace- or comma-separated list of member
/// names. Each token is looked up in the owning namespace: known names
/// become `<<namespace-name>>` links, unknown ones are kept as plain text.
/// Trailing `,` and `.` punctuation is preserved and re-appended after the
/// resolved token.
pub fn resolve_see(namespace: &NamespaceIndex<'_>, raw: &str) -> String {
    raw.split_whitespace()
        .map(|token| {
            let name = token.trim_end_matches([',', '.']);
            let punctuation = &token[name.len()..];
            if !name.is_empty() && namespace.contains(name) {
                format!("<<{}-{}>>{}", namespace.name(), name, punctuation)
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
