//! Post listing and post detail output formatting.

use blog_store_rs::{PostDetail, PostPage};
use owo_colors::OwoColorize;

use super::helpers::{format_date, format_state, format_tags, pad, truncate_id, truncate_str};

/// Formats a page of posts as JSON: `{ "posts": [...], "meta": {...} }`.
pub fn format_posts_json(page: &PostPage) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(page)
}

/// Formats a page of posts as a table, followed by a pagination footer.
pub fn format_posts_table(page: &PostPage, use_colors: bool) -> String {
    if page.posts.is_empty() {
        return if page.meta.total == 0 {
            "No posts found.\n".to_string()
        } else {
            format!(
                "No posts on page {} ({} posts in {} pages).\n",
                page.meta.pagina, page.meta.total, page.meta.paginas_total
            )
        };
    }

    let mut output = String::new();

    let header = format!(
        "{:<8} {:<10} {:<10} {:<12} {:>7} {:>5} {:<16} {}",
        "ID", "Date", "State", "Author", "Views", "Likes", "Tags", "Title"
    );
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(&header);
        output.push('\n');
    }

    for listed in &page.posts {
        let post = &listed.post;
        let likes = if listed.is_liked {
            format!("{}*", listed.likes_count)
        } else {
            listed.likes_count.to_string()
        };

        let line = format!(
            "{} {} {} {} {:>7} {:>5} {} {}",
            pad(&truncate_id(&post.id), 8),
            pad(&format_date(&post.fecha_creacion), 10),
            format_state(&post.estado, 10, use_colors),
            pad(&truncate_str(&post.autor, 12), 12),
            post.visitas,
            likes,
            pad(&format_tags(&post.etiquetas, 16), 16),
            post.titulo
        );
        output.push_str(&line);
        output.push('\n');
    }

    let footer = format!(
        "Page {} of {} ({} posts)",
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

/// Formats a single post as JSON.
pub fn format_post_detail_json(detail: &PostDetail) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(detail)
}

/// Formats a single post as labeled lines followed by its body.
pub fn format_post_detail_table(detail: &PostDetail, use_colors: bool) -> String {
    let listed = &detail.post;
    let post = &listed.post;
    let mut output = String::new();

    let title_label = if use_colors {
        "Post:".bold().to_string()
    } else {
        "Post:".to_string()
    };
    output.push_str(&format!("{} {}\n", title_label, post.titulo));
    output.push_str(&format!("ID: {}\n", post.id));
    output.push_str(&format!("Author: {}\n", post.autor));
    output.push_str(&format!(
        "State: {}\n",
        format_state(&post.estado, 0, use_colors)
    ));

    match &detail.categoria {
        Some(Some(categoria)) => {
            output.push_str(&format!("Category: {}\n", categoria.nombre));
        }
        Some(None) => {
            let id = post.categoria_id.as_deref().unwrap_or_default();
            output.push_str(&format!("Category: {id} (unknown)\n"));
        }
        None => {}
    }

    if !post.etiquetas.is_empty() {
        output.push_str(&format!("Tags: {}\n", format_tags(&post.etiquetas, usize::MAX)));
    }

    output.push_str(&format!("Created: {}\n", format_date(&post.fecha_creacion)));
    if let Some(updated) = &post.fecha_actualizacion {
        output.push_str(&format!("Updated: {}\n", format_date(updated)));
    }

    let liked = if listed.is_liked { " (liked)" } else { "" };
    output.push_str(&format!(
        "Views: {}  Likes: {}{}\n",
        post.visitas, listed.likes_count, liked
    ));

    if !post.contenido.is_empty() {
        output.push('\n');
        for line in post.contenido.lines() {
            output.push_str(&format!("  {line}\n"));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_store_rs::{get_post, list_posts, BlogData, ListOptions, MemoryRepository};

    fn sample_page(opts: &ListOptions) -> PostPage {
        list_posts(&MemoryRepository::new(BlogData::sample()), opts).unwrap()
    }

    #[test]
    fn test_posts_table() {
        let page = sample_page(&ListOptions::default());
        let table = format_posts_table(&page, false);

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("Bienvenido al Blog"));
        assert!(lines[1].contains("2024-01-01"));
        assert!(lines[1].contains("#bienvenida"));
        assert_eq!(lines[2], "Page 1 of 1 (1 posts)");
    }

    #[test]
    fn test_posts_table_empty() {
        let page = sample_page(&ListOptions {
            q: Some("autor:nadie".to_string()),
            ..ListOptions::default()
        });
        assert_eq!(format_posts_table(&page, false), "No posts found.\n");
    }

    #[test]
    fn test_posts_table_past_last_page() {
        let page = sample_page(&ListOptions {
            pagina: 3,
            ..ListOptions::default()
        });
        assert_eq!(
            format_posts_table(&page, false),
            "No posts on page 3 (1 posts in 1 pages).\n"
        );
    }

    fn sample_detail(categoria_id: Option<&str>) -> PostDetail {
        let mut data = BlogData::sample();
        data.posts[0].categoria_id = categoria_id.map(str::to_string);
        data.posts[0].likes = vec!["maria".to_string()];
        get_post(&MemoryRepository::new(data), "post-1", Some("maria"))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_post_detail_table() {
        let table = format_post_detail_table(&sample_detail(Some("cat-1")), false);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Post: Bienvenido al Blog");
        assert_eq!(lines[1], "ID: post-1");
        assert!(table.contains("State: publicado\n"));
        assert!(table.contains("Category: Tecnología\n"));
        assert!(table.contains("Tags: #bienvenida #blog\n"));
        assert!(table.contains("Created: 2024-01-01\n"));
        assert!(table.contains("Views: 0  Likes: 1 (liked)\n"));
        assert!(table.ends_with("  Este es el primer post de nuestro blog...\n"));
    }

    #[test]
    fn test_post_detail_table_category_variants() {
        let table = format_post_detail_table(&sample_detail(Some("cat-9")), false);
        assert!(table.contains("Category: cat-9 (unknown)\n"));

        let table = format_post_detail_table(&sample_detail(None), false);
        assert!(!table.contains("Category:"));
    }

    #[test]
    fn test_post_detail_json() {
        let json: serde_json::Value =
            serde_json::from_str(&format_post_detail_json(&sample_detail(Some("cat-2"))).unwrap())
                .unwrap();
        assert_eq!(json["id"], "post-1");
        assert_eq!(json["isLiked"], true);
        assert_eq!(json["categoria"]["nombre"], "Lifestyle");
    }

    #[test]
    fn test_posts_json() {
        let page = sample_page(&ListOptions::default());
        let json: serde_json::Value = serde_json::from_str(&format_posts_json(&page).unwrap()).unwrap();

        assert_eq!(json["meta"]["total"], 1);
        assert_eq!(json["meta"]["paginasTotal"], 1);
        assert_eq!(json["posts"][0]["titulo"], "Bienvenido al Blog");
        assert_eq!(json["posts"][0]["likesCount"], 0);
    }
}
