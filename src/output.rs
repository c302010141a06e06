//! Shared rendering for terminal progress output.

use crate::defaults;

const DIM: &str = "\x1b[2m";
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Truncate chunk text to a short preview for progress lines.
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(defaults::CHUNK_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Render a "chunk i/N" progress line to stderr.
pub fn render_chunk_progress(index: usize, total: usize, text: &str) {
    eprintln!("{DIM}[{}/{}]{RESET} {}", index + 1, total, preview(text));
}

/// Render a skipped-chunk notice to stderr.
pub fn render_chunk_skipped(index: usize) {
    eprintln!("{YELLOW}lector: substituting silence for chunk {}{RESET}", index);
}

/// Render a pipeline stage transition to stderr.
pub fn render_stage(name: &str) {
    eprintln!("{DIM}lector: stage {}{RESET}", name);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("short text"), "short text");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "word ".repeat(40);
        let p = preview(&long);

        assert!(p.ends_with("..."));
        assert_eq!(p.chars().count(), defaults::CHUNK_PREVIEW_CHARS + 3);
    }

    #[test]
    fn test_preview_handles_multibyte_boundary() {
        let long = "ß".repeat(defaults::CHUNK_PREVIEW_CHARS + 5);
        let p = preview(&long);

        assert!(p.ends_with("..."));
    }

    #[test]
    fn test_render_functions_do_not_panic() {
        render_chunk_progress(0, 3, "hello world");
        render_chunk_skipped(1);
        render_stage("synthesizing");
    }
}
