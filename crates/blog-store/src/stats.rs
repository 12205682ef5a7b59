//! Blog-wide statistics for a dashboard view.

use serde::Serialize;
use tracing::debug;

use crate::listing::{sort_posts, SortField};
use crate::models::{Comment, Post};
use crate::repository::PostRepository;
use crate::store::Result;

/// Number of posts listed in [`BlogStats::recent_posts`].
pub const RECENT_POSTS: usize = 5;

/// Collection sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_posts: usize,
    pub total_comments: usize,
    pub total_categories: usize,
}

/// Comment counts per moderation state. Other states are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommentsBreakdown {
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

/// Summary of a recent post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPost {
    pub id: String,
    pub titulo: String,
    pub autor: String,
    pub fecha_creacion: String,
    pub visitas: u64,
    /// Number of comments on the post, in any state.
    pub comentarios: usize,
}

/// Post count of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub id: String,
    pub nombre: String,
    pub posts_count: usize,
}

/// Dashboard statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogStats {
    pub stats: Totals,
    pub comments_breakdown: CommentsBreakdown,
    /// The newest posts, newest first.
    pub recent_posts: Vec<RecentPost>,
    /// Every category in storage order, including empty ones.
    pub categories_stats: Vec<CategoryStats>,
}

/// Computes dashboard statistics from a repository snapshot.
///
/// # Errors
///
/// Returns an error only if the repository cannot produce its snapshot.
///
/// # Example
///
/// ```
/// use blog_store_rs::stats::blog_stats;
/// use blog_store_rs::{BlogData, MemoryRepository};
///
/// let stats = blog_stats(&MemoryRepository::new(BlogData::sample()))?;
/// assert_eq!(stats.stats.total_posts, 1);
/// assert_eq!(stats.comments_breakdown.approved, 1);
/// assert_eq!(stats.recent_posts[0].comentarios, 1);
/// # Ok::<(), blog_store_rs::StoreError>(())
/// ```
pub fn blog_stats<R: PostRepository + ?Sized>(repo: &R) -> Result<BlogStats> {
    let posts = repo.posts()?;
    let comments = repo.comments()?;
    let categories = repo.categories()?;

    let stats = Totals {
        total_posts: posts.len(),
        total_comments: comments.len(),
        total_categories: categories.len(),
    };

    let categories_stats = categories
        .into_iter()
        .map(|cat| CategoryStats {
            posts_count: posts
                .iter()
                .filter(|p| p.categoria_id.as_deref() == Some(cat.id.as_str()))
                .count(),
            id: cat.id,
            nombre: cat.nombre,
        })
        .collect();

    let stats = BlogStats {
        stats,
        comments_breakdown: breakdown(&comments),
        recent_posts: recent_posts(&posts, &comments),
        categories_stats,
    };
    debug!(
        posts = stats.stats.total_posts,
        comments = stats.stats.total_comments,
        "computed blog stats"
    );
    Ok(stats)
}

fn breakdown(comments: &[Comment]) -> CommentsBreakdown {
    comments
        .iter()
        .fold(CommentsBreakdown::default(), |mut acc, c| {
            match c.estado.as_str() {
                "aprobado" => acc.approved += 1,
                "pendiente" => acc.pending += 1,
                "rechazado" => acc.rejected += 1,
                _ => {}
            }
            acc
        })
}

fn recent_posts(posts: &[Post], comments: &[Comment]) -> Vec<RecentPost> {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sort_posts(&mut sorted, SortField::FechaCreacion);

    sorted
        .into_iter()
        .take(RECENT_POSTS)
        .map(|p| RecentPost {
            id: p.id.clone(),
            titulo: p.titulo.clone(),
            autor: p.autor.clone(),
            fecha_creacion: p.fecha_creacion.clone(),
            visitas: p.visitas,
            comentarios: comments.iter().filter(|c| c.post_id == p.id).count(),
        })
        .collect()
}
