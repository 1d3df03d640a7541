// src/utils/html_debug.rs
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::utils::error::StorageError;

/// Markup the extractors rely on, as (pattern, highlight kind) pairs.
/// Searched against the raw page source, not the parsed tree.
pub const LAYOUT_MARKER_PATTERNS: &[(&str, &str)] = &[
    (r#"(?i)<table[^>]*class="?dextable"?[^>]*>"#, "table"),
    (r"(?i)Damage Taken|Evolutionary Chain|Locations|Level Up|TM &(?:amp;)? HM|Base Stats - Total:\s*\d+", "header"),
    (r"(?i)Max Stats|Lv\. 100", "header"),
    (r#"/pokedex-bw/type/[a-z]+\.gif"#, "type-icon"),
    (r#"/games/type/[a-z]+\.gif"#, "damage-icon"),
    (r#"evoicon/l\d+\.png"#, "evo-icon"),
    (r#"/(?:icon|sprites(?:/[a-z]+)?)/\d{3}\.png"#, "sprite"),
    (r"(?i)Japan:|French:|German:|Korean:", "names"),
];

/// Wraps each highlighted byte range of `html` in a styled span and writes the result.
/// Ranges overlapping an earlier range are dropped.
pub fn save_debug_html(
    html: &str,
    path: &Path,
    highlights: &[(usize, usize, &str)],
) -> Result<(), StorageError> {
    let mut debug_html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n");
    debug_html.push_str(".hl-table { outline: 2px solid #FFA500; }\n");
    debug_html.push_str(".hl-header { background-color: #FFFF00; }\n");
    debug_html.push_str(".hl-type-icon { background-color: #90EE90; }\n");
    debug_html.push_str(".hl-damage-icon { background-color: #ADD8E6; }\n");
    debug_html.push_str(".hl-evo-icon { background-color: #FFC0CB; }\n");
    debug_html.push_str(".hl-other { background-color: #D3D3D3; }\n");
    debug_html.push_str("</style>\n</head>\n<body>\n<pre>\n");

    let mut sorted = highlights.to_vec();
    sorted.sort_by_key(|h| (h.0, std::cmp::Reverse(h.1)));

    let mut last_pos = 0;
    for (start, end, kind) in sorted {
        if start < last_pos || end > html.len() {
            continue;
        }
        push_escaped(&mut debug_html, &html[last_pos..start]);

        let css_class = match kind {
            "table" => "hl-table",
            "header" => "hl-header",
            "type-icon" => "hl-type-icon",
            "damage-icon" => "hl-damage-icon",
            "evo-icon" => "hl-evo-icon",
            _ => "hl-other",
        };
        debug_html.push_str(&format!(
            "<span class=\"{}\" title=\"{} @ {}-{}\">",
            css_class, kind, start, end
        ));
        push_escaped(&mut debug_html, &html[start..end]);
        debug_html.push_str("</span>");

        last_pos = end;
    }
    push_escaped(&mut debug_html, &html[last_pos..]);
    debug_html.push_str("\n</pre>\n</body>\n</html>");

    fs::write(path, debug_html)?;
    tracing::debug!("Saved debug HTML to {}", path.display());
    Ok(())
}

/// Creates an annotated copy of a page with every layout marker highlighted.
pub fn create_debug_html(html: &str, path: &Path) -> Result<(), StorageError> {
    let mut highlights = Vec::new();

    for (pattern, kind) in LAYOUT_MARKER_PATTERNS {
        let re = Regex::new(pattern).map_err(|e| {
            StorageError::SerializationError(format!("Invalid marker pattern '{}': {}", pattern, e))
        })?;
        for mat in re.find_iter(html) {
            highlights.push((mat.start(), mat.end(), *kind));
        }
    }

    save_debug_html(html, path, &highlights)
}

// The annotated copy shows the page source as text, so markup must be escaped.
fn push_escaped(out: &mut String, raw: &str) {
    for ch in raw.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            _ => out.push(ch),
        }
    }
}
