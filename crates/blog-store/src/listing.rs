//! Post listing: simple filters, structured search, sorting and pagination.
//! Also the per-post views built on it: a post's detail and its comments.
//!
//! Post listing stages run in a fixed order:
//!
//! 1. exact filters (`autor`, `estado`, `etiqueta`, `categoria`)
//! 2. legacy `busqueda` search over title and body
//! 3. structured query `q` over [`POST_SEARCH_FIELDS`]
//! 4. sort
//! 5. paginate
//!
//! `meta.total` counts the posts that survived filtering, before pagination.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use crate::models::{Category, Comment, Post};
use crate::query::{self, parse_instant};
use crate::repository::PostRepository;
use crate::store::Result;

/// Fields searched by free-text terms of a post query.
pub const POST_SEARCH_FIELDS: [&str; 3] = ["titulo", "contenido", "autor"];

/// Default page size.
pub const DEFAULT_LIMIT: usize = 10;

/// Sort order for post listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    /// Title, alphabetical (case-insensitive).
    Titulo,
    /// View count, most viewed first.
    Visitas,
    /// Creation date, newest first.
    #[default]
    FechaCreacion,
}

/// Options for listing posts.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Only posts by this author (exact).
    pub autor: Option<String>,
    /// Only posts in this state (exact).
    pub estado: Option<String>,
    /// Only posts carrying this tag.
    pub etiqueta: Option<String>,
    /// Only posts in this category ID.
    pub categoria: Option<String>,
    /// Case-insensitive substring of title or body.
    pub busqueda: Option<String>,
    /// Structured query.
    pub q: Option<String>,
    /// Sort order.
    pub ordenar: SortField,
    /// 1-based page number.
    pub pagina: usize,
    /// Page size.
    pub limite: usize,
    /// Username used to compute `isLiked`.
    pub viewer: Option<String>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            autor: None,
            estado: None,
            etiqueta: None,
            categoria: None,
            busqueda: None,
            q: None,
            ordenar: SortField::default(),
            pagina: 1,
            limite: DEFAULT_LIMIT,
            viewer: None,
        }
    }
}

/// A post as it appears in a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedPost {
    #[serde(flatten)]
    pub post: Post,
    pub likes_count: usize,
    pub is_liked: bool,
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Posts matching the filters, across all pages.
    pub total: usize,
    pub pagina: usize,
    pub limite: usize,
    pub paginas_total: usize,
}

/// One page of a post listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostPage {
    pub posts: Vec<ListedPost>,
    pub meta: PageMeta,
}

/// Options for listing the comments on a post.
#[derive(Debug, Clone)]
pub struct CommentListOptions {
    /// Only comments in this moderation state (exact).
    pub estado: Option<String>,
    /// 1-based page number.
    pub pagina: usize,
    /// Page size.
    pub limite: usize,
    /// Username used to compute `isLiked`.
    pub viewer: Option<String>,
}

impl Default for CommentListOptions {
    fn default() -> Self {
        Self {
            estado: None,
            pagina: 1,
            limite: DEFAULT_LIMIT,
            viewer: None,
        }
    }
}

/// A comment as it appears in a listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedComment {
    #[serde(flatten)]
    pub comment: Comment,
    pub likes_count: usize,
    pub is_liked: bool,
}

/// One page of a post's comments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentPage {
    pub comments: Vec<ListedComment>,
    pub meta: PageMeta,
}

/// A single post with its category filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: ListedPost,
    /// Present only when the post has a category ID; `Some(None)` (rendered
    /// as `null`) when that ID names no known category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<Option<Category>>,
}

/// Lists posts from a repository.
///
/// # Errors
///
/// Returns an error only if the repository cannot produce its snapshot.
///
/// # Example
///
/// ```
/// use blog_store_rs::listing::{list_posts, ListOptions, SortField};
/// use blog_store_rs::{BlogData, MemoryRepository};
///
/// let repo = MemoryRepository::new(BlogData::sample());
/// let opts = ListOptions {
///     q: Some("visitas:>0".to_string()),
///     ordenar: SortField::Visitas,
///     ..ListOptions::default()
/// };
///
/// let page = list_posts(&repo, &opts)?;
/// assert!(page.posts.iter().all(|p| p.post.visitas > 0));
/// # Ok::<(), blog_store_rs::StoreError>(())
/// ```
pub fn list_posts<R: PostRepository + ?Sized>(repo: &R, opts: &ListOptions) -> Result<PostPage> {
    let posts = repo.posts()?;
    let mut results = filter_posts(&posts, opts);
    sort_posts(&mut results, opts.ordenar);
    let page = paginate(results, opts);
    debug!(
        total = page.meta.total,
        returned = page.posts.len(),
        pagina = page.meta.pagina,
        "listed posts"
    );
    Ok(page)
}

/// Looks up one post by ID and fills in its category.
///
/// Returns `None` if no post has that ID.
///
/// # Errors
///
/// Returns an error only if the repository cannot produce its snapshot.
pub fn get_post<R: PostRepository + ?Sized>(
    repo: &R,
    id: &str,
    viewer: Option<&str>,
) -> Result<Option<PostDetail>> {
    let Some(post) = repo.posts()?.into_iter().find(|p| p.id == id) else {
        return Ok(None);
    };

    let categoria = match &post.categoria_id {
        Some(categoria_id) => Some(repo.category(categoria_id)?),
        None => None,
    };

    Ok(Some(PostDetail {
        post: listed_post(&post, viewer),
        categoria,
    }))
}

/// Lists the comments on a post, newest first.
///
/// Returns `None` if no post has the given ID.
///
/// # Errors
///
/// Returns an error only if the repository cannot produce its snapshot.
///
/// # Example
///
/// ```
/// use blog_store_rs::listing::{list_comments, CommentListOptions};
/// use blog_store_rs::{BlogData, MemoryRepository};
///
/// let repo = MemoryRepository::new(BlogData::sample());
/// let page = list_comments(&repo, "post-1", &CommentListOptions::default())?;
/// assert_eq!(page.map(|p| p.meta.total), Some(1));
///
/// let missing = list_comments(&repo, "post-9", &CommentListOptions::default())?;
/// assert!(missing.is_none());
/// # Ok::<(), blog_store_rs::StoreError>(())
/// ```
pub fn list_comments<R: PostRepository + ?Sized>(
    repo: &R,
    post_id: &str,
    opts: &CommentListOptions,
) -> Result<Option<CommentPage>> {
    if !repo.posts()?.iter().any(|p| p.id == post_id) {
        return Ok(None);
    }

    let mut comments = repo.comments_for(post_id)?;
    if let Some(estado) = &opts.estado {
        comments.retain(|c| &c.estado == estado);
    }
    comments.sort_by(|a, b| newest_first(&a.fecha_creacion, &b.fecha_creacion));

    let (comments, meta) = page_of(comments, opts.pagina, opts.limite);
    let viewer = opts.viewer.as_deref();
    let comments = comments
        .into_iter()
        .map(|comment| ListedComment {
            likes_count: comment.likes_count(),
            is_liked: viewer.is_some_and(|v| comment.is_liked_by(v)),
            comment,
        })
        .collect();

    debug!(post_id, total = meta.total, "listed comments");
    Ok(Some(CommentPage { comments, meta }))
}

/// Applies the exact filters, legacy search and structured query.
fn filter_posts<'a>(posts: &'a [Post], opts: &ListOptions) -> Vec<&'a Post> {
    let mut results: Vec<&Post> = posts.iter().collect();

    if let Some(autor) = &opts.autor {
        results.retain(|p| &p.autor == autor);
    }

    if let Some(estado) = &opts.estado {
        results.retain(|p| &p.estado == estado);
    }

    if let Some(etiqueta) = &opts.etiqueta {
        results.retain(|p| p.etiquetas.contains(etiqueta));
    }

    if let Some(categoria) = &opts.categoria {
        results.retain(|p| p.categoria_id.as_ref() == Some(categoria));
    }

    if let Some(busqueda) = opts.busqueda.as_deref().filter(|s| !s.is_empty()) {
        let term = busqueda.to_lowercase();
        results.retain(|p| {
            p.titulo.to_lowercase().contains(&term) || p.contenido.to_lowercase().contains(&term)
        });
    }

    if let Some(q) = opts.q.as_deref().filter(|s| !s.is_empty()) {
        let matched: Vec<&Post> = query::filter(&results, q, &POST_SEARCH_FIELDS)
            .into_iter()
            .copied()
            .collect();
        results = matched;
    }

    results
}

/// Sorts posts in place. The sort is stable.
pub(crate) fn sort_posts(posts: &mut [&Post], field: SortField) {
    match field {
        SortField::Titulo => posts.sort_by(|a, b| {
            a.titulo
                .to_lowercase()
                .cmp(&b.titulo.to_lowercase())
                .then_with(|| a.titulo.cmp(&b.titulo))
        }),
        SortField::Visitas => posts.sort_by(|a, b| b.visitas.cmp(&a.visitas)),
        SortField::FechaCreacion => {
            posts.sort_by(|a, b| newest_first(&a.fecha_creacion, &b.fecha_creacion))
        }
    }
}

/// Orders timestamps newest first; unreadable timestamps go last.
fn newest_first(a: &str, b: &str) -> Ordering {
    match (parse_instant(a), parse_instant(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn listed_post(post: &Post, viewer: Option<&str>) -> ListedPost {
    ListedPost {
        likes_count: post.likes_count(),
        is_liked: viewer.is_some_and(|v| post.is_liked_by(v)),
        post: post.clone(),
    }
}

/// Cuts one page out of the sorted results.
fn paginate(posts: Vec<&Post>, opts: &ListOptions) -> PostPage {
    let (posts, meta) = page_of(posts, opts.pagina, opts.limite);
    let viewer = opts.viewer.as_deref();
    PostPage {
        posts: posts.into_iter().map(|p| listed_post(p, viewer)).collect(),
        meta,
    }
}

/// Returns page `pagina` of `items` and its metadata. Both bounds are
/// clamped to at least 1.
fn page_of<T>(items: Vec<T>, pagina: usize, limite: usize) -> (Vec<T>, PageMeta) {
    let pagina = pagina.max(1);
    let limite = limite.max(1);
    let total = items.len();
    let start = (pagina - 1).saturating_mul(limite);

    let page = items.into_iter().skip(start).take(limite).collect();
    let meta = PageMeta {
        total,
        pagina,
        limite,
        paginas_total: total.div_ceil(limite),
    };
    (page, meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryRepository;

    fn make_post(id: &str, titulo: &str, autor: &str, visitas: u64, fecha: &str) -> Post {
        Post {
            id: id.to_string(),
            titulo: titulo.to_string(),
            contenido: format!("Contenido de {titulo}"),
            autor: autor.to_string(),
            etiquetas: vec![],
            categoria_id: None,
            estado: "publicado".to_string(),
            fecha_creacion: fecha.to_string(),
            fecha_actualizacion: None,
            visitas,
            likes: vec![],
        }
    }

    fn repo() -> MemoryRepository {
        let mut draft = make_post("4", "borrador", "maria", 1, "2023-04-01T00:00:00Z");
        draft.estado = "borrador".to_string();
        draft.etiquetas = vec!["rust".to_string()];
        draft.categoria_id = Some("cat-1".to_string());
        draft.likes = vec!["admin".to_string()];

        MemoryRepository::from_posts(vec![
            make_post("1", "Zeta", "admin", 30, "2023-01-01T00:00:00Z"),
            make_post("2", "alfa", "admin", 10, "2023-03-01T00:00:00Z"),
            make_post("3", "Beta", "pedro", 20, "2023-02-01T00:00:00Z"),
            draft,
        ])
    }

    fn ids(page: &PostPage) -> Vec<&str> {
        page.posts.iter().map(|p| p.post.id.as_str()).collect()
    }

    fn list(opts: ListOptions) -> PostPage {
        list_posts(&repo(), &opts).unwrap()
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let page = list(ListOptions::default());
        assert_eq!(ids(&page), vec!["4", "2", "3", "1"]);
        assert_eq!(page.meta.total, 4);
        assert_eq!(page.meta.paginas_total, 1);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let page = list(ListOptions {
            ordenar: SortField::Titulo,
            ..ListOptions::default()
        });
        assert_eq!(ids(&page), vec!["2", "3", "4", "1"]);
    }

    #[test]
    fn test_sort_by_visits_descending() {
        let page = list(ListOptions {
            ordenar: SortField::Visitas,
            ..ListOptions::default()
        });
        assert_eq!(ids(&page), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_exact_filters() {
        let by_author = list(ListOptions {
            autor: Some("admin".to_string()),
            ..ListOptions::default()
        });
        assert_eq!(ids(&by_author), vec!["2", "1"]);

        // Simple filters are case-sensitive, unlike query predicates.
        let wrong_case = list(ListOptions {
            autor: Some("Admin".to_string()),
            ..ListOptions::default()
        });
        assert!(wrong_case.posts.is_empty());

        let by_state = list(ListOptions {
            estado: Some("borrador".to_string()),
            ..ListOptions::default()
        });
        assert_eq!(ids(&by_state), vec!["4"]);

        let by_tag = list(ListOptions {
            etiqueta: Some("rust".to_string()),
            ..ListOptions::default()
        });
        assert_eq!(ids(&by_tag), vec!["4"]);

        let by_category = list(ListOptions {
            categoria: Some("cat-1".to_string()),
            ..ListOptions::default()
        });
        assert_eq!(ids(&by_category), vec!["4"]);
    }

    #[test]
    fn test_busqueda_searches_title_and_body() {
        let page = list(ListOptions {
            busqueda: Some("BETA".to_string()),
            ..ListOptions::default()
        });
        assert_eq!(ids(&page), vec!["3"]);

        // The author is not part of the legacy search.
        let page = list(ListOptions {
            busqueda: Some("pedro".to_string()),
            ..ListOptions::default()
        });
        assert!(page.posts.is_empty());
    }

    #[test]
    fn test_structured_query() {
        let page = list(ListOptions {
            q: Some("visitas:>=20".to_string()),
            ..ListOptions::default()
        });
        assert_eq!(ids(&page), vec!["3", "1"]);

        // Free text also searches the author.
        let page = list(ListOptions {
            q: Some("pedro".to_string()),
            ..ListOptions::default()
        });
        assert_eq!(ids(&page), vec!["3"]);

        let page = list(ListOptions {
            q: Some("fechaCreacion:<2023-02-15 autor:admin".to_string()),
            ..ListOptions::default()
        });
        assert_eq!(ids(&page), vec!["1"]);
    }

    #[test]
    fn test_empty_query_is_ignored() {
        let page = list(ListOptions {
            q: Some(String::new()),
            ..ListOptions::default()
        });
        assert_eq!(page.meta.total, 4);
    }

    #[test]
    fn test_pagination() {
        let page = list(ListOptions {
            pagina: 2,
            limite: 3,
            ..ListOptions::default()
        });
        assert_eq!(ids(&page), vec!["1"]);
        assert_eq!(
            page.meta,
            PageMeta {
                total: 4,
                pagina: 2,
                limite: 3,
                paginas_total: 2
            }
        );
    }

    #[test]
    fn test_pagination_past_end_and_clamping() {
        let page = list(ListOptions {
            pagina: 9,
            limite: 2,
            ..ListOptions::default()
        });
        assert!(page.posts.is_empty());
        assert_eq!(page.meta.total, 4);

        let page = list(ListOptions {
            pagina: 0,
            limite: 0,
            ..ListOptions::default()
        });
        assert_eq!(page.meta.pagina, 1);
        assert_eq!(page.meta.limite, 1);
        assert_eq!(page.meta.paginas_total, 4);
        assert_eq!(ids(&page), vec!["4"]);
    }

    #[test]
    fn test_likes_and_viewer() {
        let page = list(ListOptions {
            estado: Some("borrador".to_string()),
            viewer: Some("admin".to_string()),
            ..ListOptions::default()
        });
        assert_eq!(page.posts[0].likes_count, 1);
        assert!(page.posts[0].is_liked);

        let anonymous = list(ListOptions {
            estado: Some("borrador".to_string()),
            ..ListOptions::default()
        });
        assert!(!anonymous.posts[0].is_liked);
    }

    #[test]
    fn test_page_serializes_like_the_api() {
        let page = list(ListOptions {
            limite: 1,
            ..ListOptions::default()
        });
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["meta"]["paginasTotal"], 4);
        assert_eq!(json["posts"][0]["likesCount"], 1);
        assert_eq!(json["posts"][0]["isLiked"], false);
        assert_eq!(json["posts"][0]["titulo"], "borrador");
    }

    // ==================== Comments and Detail ====================

    fn make_comment(id: &str, post_id: &str, estado: &str, fecha: &str) -> Comment {
        Comment {
            id: id.to_string(),
            post_id: post_id.to_string(),
            autor: "Lector".to_string(),
            email: None,
            contenido: format!("Comentario {id}"),
            estado: estado.to_string(),
            fecha_creacion: fecha.to_string(),
            likes: vec![],
        }
    }

    fn blog_repo() -> MemoryRepository {
        let mut data = repo().data().clone();
        data.posts[0].categoria_id = Some("cat-1".to_string());
        data.posts[1].categoria_id = Some("cat-gone".to_string());
        data.categories = vec![Category {
            id: "cat-1".to_string(),
            nombre: "Tecnología".to_string(),
            descripcion: String::new(),
            fecha_creacion: "2023-01-01T00:00:00Z".to_string(),
        }];

        let mut liked = make_comment("c2", "1", "aprobado", "2023-02-01T00:00:00Z");
        liked.likes = vec!["maria".to_string()];
        data.comments = vec![
            make_comment("c1", "1", "aprobado", "2023-01-05T00:00:00Z"),
            liked,
            make_comment("c3", "1", "pendiente", "not a date"),
            make_comment("c4", "2", "aprobado", "2023-03-01T00:00:00Z"),
        ];
        MemoryRepository::new(data)
    }

    fn comment_ids(page: &CommentPage) -> Vec<&str> {
        page.comments.iter().map(|c| c.comment.id.as_str()).collect()
    }

    #[test]
    fn test_list_comments_newest_first() {
        let page = list_comments(&blog_repo(), "1", &CommentListOptions::default())
            .unwrap()
            .unwrap();
        assert_eq!(comment_ids(&page), vec!["c2", "c1", "c3"]);
        assert_eq!(page.meta.total, 3);
    }

    #[test]
    fn test_list_comments_filter_and_paginate() {
        let opts = CommentListOptions {
            estado: Some("aprobado".to_string()),
            pagina: 2,
            limite: 1,
            viewer: Some("maria".to_string()),
        };
        let page = list_comments(&blog_repo(), "1", &opts).unwrap().unwrap();

        assert_eq!(comment_ids(&page), vec!["c1"]);
        assert_eq!(
            page.meta,
            PageMeta {
                total: 2,
                pagina: 2,
                limite: 1,
                paginas_total: 2
            }
        );

        let first = list_comments(&blog_repo(), "1", &CommentListOptions { pagina: 1, ..opts })
            .unwrap()
            .unwrap();
        assert!(first.comments[0].is_liked);
        assert_eq!(first.comments[0].likes_count, 1);
    }

    #[test]
    fn test_list_comments_unknown_post() {
        let page = list_comments(&blog_repo(), "9", &CommentListOptions::default()).unwrap();
        assert!(page.is_none());

        // A post with no comments is an empty page, not a missing post.
        let page = list_comments(&blog_repo(), "3", &CommentListOptions::default())
            .unwrap()
            .unwrap();
        assert!(page.comments.is_empty());
        assert_eq!(page.meta.paginas_total, 0);
    }

    #[test]
    fn test_comment_page_serializes_camel_case() {
        let page = list_comments(&blog_repo(), "2", &CommentListOptions::default())
            .unwrap()
            .unwrap();
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["comments"][0]["postId"], "2");
        assert_eq!(json["comments"][0]["likesCount"], 0);
        assert_eq!(json["meta"]["paginasTotal"], 1);
    }

    #[test]
    fn test_get_post_fills_category() {
        let repo = blog_repo();

        let detail = get_post(&repo, "1", Some("admin")).unwrap().unwrap();
        assert_eq!(detail.post.post.titulo, "Zeta");
        assert_eq!(
            detail.categoria.clone().flatten().map(|c| c.nombre),
            Some("Tecnología".to_string())
        );
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["categoria"]["nombre"], "Tecnología");
        assert_eq!(json["titulo"], "Zeta");

        // Unknown category ID renders as null.
        let detail = get_post(&repo, "2", None).unwrap().unwrap();
        assert_eq!(detail.categoria, Some(None));
        let json = serde_json::to_value(&detail).unwrap();
        assert!(json["categoria"].is_null());
        assert!(json.as_object().unwrap().contains_key("categoria"));

        // No category ID: no categoria key at all.
        let detail = get_post(&repo, "3", None).unwrap().unwrap();
        let json = serde_json::to_value(&detail).unwrap();
        assert!(!json.as_object().unwrap().contains_key("categoria"));

        assert!(get_post(&repo, "missing", None).unwrap().is_none());
    }

    #[test]
    fn test_get_post_is_liked() {
        let detail = get_post(&repo(), "4", Some("admin")).unwrap().unwrap();
        assert!(detail.post.is_liked);
        assert_eq!(detail.post.likes_count, 1);
    }
}
