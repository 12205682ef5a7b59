//! In-memory blog data with a structured query engine.
//!
//! This crate holds blog posts, comments and categories, persists them as a
//! single JSON document, lists and summarizes them, and filters them with a
//! small query language:
//!
//! ```
//! use blog_store_rs::{query, BlogData, POST_SEARCH_FIELDS};
//!
//! let data = BlogData::sample();
//! let hits = query::filter(&data.posts, "autor:admin bienvenido", &POST_SEARCH_FIELDS);
//! assert_eq!(hits.len(), 1);
//! ```
//!
//! See [`query`] for the syntax.

use serde::{Deserialize, Serialize};

pub mod listing;
pub mod models;
pub mod query;
pub mod record;
pub mod repository;
pub mod stats;
pub mod store;

pub use listing::{
    get_post, list_comments, list_posts, CommentListOptions, CommentPage, ListOptions,
    ListedComment, ListedPost, PageMeta, PostDetail, PostPage, SortField, POST_SEARCH_FIELDS,
};
pub use models::{Category, Comment, Post};
pub use record::{Record, Value};
pub use repository::{MemoryRepository, PostRepository};
pub use stats::{blog_stats, BlogStats};
pub use store::{PostStore, StoreError};

/// All blog data, as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogData {
    /// Posts, in storage order.
    #[serde(default)]
    pub posts: Vec<Post>,

    /// Comments on posts.
    #[serde(default)]
    pub comments: Vec<Comment>,

    /// Post categories.
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl BlogData {
    /// Returns the comments on the given post, in storage order.
    pub fn comments_for<'a>(&'a self, post_id: &'a str) -> impl Iterator<Item = &'a Comment> + 'a {
        self.comments.iter().filter(move |c| c.post_id == post_id)
    }

    /// Returns the category with the given ID.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Returns the seed data a fresh blog starts with.
    ///
    /// IDs and timestamps are fixed, so two calls return equal data.
    pub fn sample() -> Self {
        const CREATED: &str = "2024-01-01T00:00:00.000Z";

        let posts = vec![Post {
            id: "post-1".to_string(),
            titulo: "Bienvenido al Blog".to_string(),
            contenido: "Este es el primer post de nuestro blog...".to_string(),
            autor: "admin".to_string(),
            etiquetas: vec!["bienvenida".to_string(), "blog".to_string()],
            categoria_id: None,
            estado: "publicado".to_string(),
            fecha_creacion: CREATED.to_string(),
            fecha_actualizacion: Some(CREATED.to_string()),
            visitas: 0,
            likes: Vec::new(),
        }];

        let comments = vec![Comment {
            id: "comment-1".to_string(),
            post_id: "post-1".to_string(),
            autor: "Usuario Anónimo".to_string(),
            email: Some("usuario@example.com".to_string()),
            contenido: "Excelente primer post!".to_string(),
            estado: "aprobado".to_string(),
            fecha_creacion: CREATED.to_string(),
            likes: Vec::new(),
        }];

        let categories = vec![
            Category {
                id: "cat-1".to_string(),
                nombre: "Tecnología".to_string(),
                descripcion: "Noticias y tutoriales sobre desarrollo y tech".to_string(),
                fecha_creacion: CREATED.to_string(),
            },
            Category {
                id: "cat-2".to_string(),
                nombre: "Lifestyle".to_string(),
                descripcion: "Estilo de vida, viajes y salud".to_string(),
                fecha_creacion: CREATED.to_string(),
            },
        ];

        Self {
            posts,
            comments,
            categories,
        }
    }
}
