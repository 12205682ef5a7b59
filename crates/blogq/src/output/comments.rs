//! Comment listing output formatting.

use blog_store_rs::CommentPage;
use owo_colors::OwoColorize;

use super::helpers::{format_date, format_state, pad, truncate_id, truncate_str};

/// Formats a page of comments as JSON: `{ "comments": [...], "meta": {...} }`.
pub fn format_comments_json(page: &CommentPage) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(page)
}

/// Formats a page of comments as a table, followed by a pagination footer.
pub fn format_comments_table(page: &CommentPage, use_colors: bool) -> String {
    if page.comments.is_empty() {
        return if page.meta.total == 0 {
            "No comments found.\n".to_string()
        } else {
            format!(
                "No comments on page {} ({} comments in {} pages).\n",
                page.meta.pagina, page.meta.total, page.meta.paginas_total
            )
        };
    }

    let mut output = String::new();

    let header = format!(
        "{:<8} {:<10} {:<10} {:<16} {:>5} {}",
        "ID", "Date", "State", "Author", "Likes", "Comment"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for listed in &page.comments {
        let comment = &listed.comment;
        let likes = if listed.is_liked {
            format!("{}*", listed.likes_count)
        } else {
            listed.likes_count.to_string()
        };

        let line = format!(
            "{} {} {} {} {:>5} {}",
            pad(&truncate_id(&comment.id), 8),
            pad(&format_date(&comment.fecha_creacion), 10),
            format_state(&comment.estado, 10, use_colors),
            pad(&truncate_str(&comment.autor, 16), 16),
            likes,
            truncate_str(comment.contenido.lines().next().unwrap_or_default(), 60)
        );
        output.push_str(&line);
        output.push('\n');
    }

    let footer = format!(
        "Page {} of {} ({} comments)",
        page.meta.pagina, page.meta.paginas_total, page.meta.total
    );
    if use_colors {
        output.push_str(&format!("{}\n", footer.dimmed()));
    } else {
        output.push_str(&footer);
        output.push('\n');
    }

    output
}
