//! Plain-text rendering of finished drafts.

#[cfg(feature = "clipboard")]
pub mod clipboard;

#[cfg(feature = "clipboard")]
pub use clipboard::{copy_to_clipboard, ClipboardError};

use std::fmt::Write as _;

use crate::types::{GeneratedPost, GenerationOutput, GenerationStats};

/// The text placed on the clipboard for one post.
pub fn clipboard_text(post: &GeneratedPost) -> String {
    let tags = post
        .hashtags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}\n\n{}\n\n{}", post.content, post.cta, tags)
}

/// One-line summary: tokens, seconds and estimated cost.
pub fn format_stats(stats: &GenerationStats) -> String {
    format!(
        "{} tokens · {:.1}s · ~${:.4}",
        group_thousands(stats.tokens_used),
        stats.generation_time,
        stats.cost
    )
}

/// Render a single post with its 1-based position.
pub fn render_post(position: usize, post: &GeneratedPost) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{position}] {} ({} words)", post.approach, post.word_count);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", post.content);
    if !post.cta.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "> {}", post.cta);
    }
    if !post.hashtags.is_empty() {
        let _ = writeln!(out);
        let tags: Vec<String> = post.hashtags.iter().map(|tag| format!("#{tag}")).collect();
        let _ = writeln!(out, "{}", tags.join(" "));
    }
    out
}

/// Render every post followed by the stats line.
pub fn render_results(output: &GenerationOutput) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Generated Posts ({})", format_stats(&output.stats));
    if output.used_fallback_plan {
        let _ = writeln!(
            out,
            "Note: the planning step returned no usable strategies; generic approaches were used."
        );
    }
    for (index, post) in output.posts.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "-".repeat(60));
        out.push_str(&render_post(index + 1, post));
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
