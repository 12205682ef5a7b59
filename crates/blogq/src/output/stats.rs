//! Blog statistics output formatting.

use blog_store_rs::BlogStats;
use owo_colors::OwoColorize;

use super::helpers::{format_date, pad, truncate_str};

/// Formats statistics as JSON.
pub fn format_stats_json(stats: &BlogStats) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(stats)
}

/// Formats statistics as sections of labeled counts.
pub fn format_stats_table(stats: &BlogStats, use_colors: bool) -> String {
    let heading = |title: &str| {
        if use_colors {
            format!("{}\n", title.bold())
        } else {
            format!("{title}\n")
        }
    };

    let mut output = heading("Totals:");
    output.push_str(&format!("  Posts: {}\n", stats.stats.total_posts));
    output.push_str(&format!("  Comments: {}\n", stats.stats.total_comments));
    output.push_str(&format!("  Categories: {}\n", stats.stats.total_categories));

    let breakdown = &stats.comments_breakdown;
    output.push('\n');
    output.push_str(&heading("Comments:"));
    output.push_str(&format!("  Approved: {}\n", breakdown.approved));
    output.push_str(&format!("  Pending: {}\n", breakdown.pending));
    output.push_str(&format!("  Rejected: {}\n", breakdown.rejected));

    output.push('\n');
    output.push_str(&heading("Recent posts:"));
    if stats.recent_posts.is_empty() {
        output.push_str("  (none)\n");
    }
    for post in &stats.recent_posts {
        output.push_str(&format!(
            "  {} {} {:>6} views {:>4} comments  {}\n",
            pad(&format_date(&post.fecha_creacion), 10),
            pad(&truncate_str(&post.autor, 12), 12),
            post.visitas,
            post.comentarios,
            post.titulo
        ));
    }

    output.push('\n');
    output.push_str(&heading("Categories:"));
    if stats.categories_stats.is_empty() {
        output.push_str("  (none)\n");
    }
    for category in &stats.categories_stats {
        output.push_str(&format!(
            "  {} {}\n",
            pad(&truncate_str(&category.nombre, 20), 20),
            category.posts_count
        ));
    }

    output
}
