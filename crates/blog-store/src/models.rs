//! Blog data models.
//!
//! Field names follow the blog's JSON representation (`titulo`,
//! `fechaCreacion`, ...), which is also the name space queries use.

use serde::{Deserialize, Serialize};

use crate::record::{Record, Value};

/// A blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post ID.
    pub id: String,

    /// Title.
    pub titulo: String,

    /// Body text.
    #[serde(default)]
    pub contenido: String,

    /// Username of the author.
    pub autor: String,

    /// Tags.
    #[serde(default)]
    pub etiquetas: Vec<String>,

    /// Category ID, if the post is categorized.
    #[serde(default)]
    pub categoria_id: Option<String>,

    /// Publication state ("borrador", "publicado", ...).
    #[serde(default = "default_post_state")]
    pub estado: String,

    /// Creation timestamp (ISO 8601).
    pub fecha_creacion: String,

    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub fecha_actualizacion: Option<String>,

    /// View count.
    #[serde(default)]
    pub visitas: u64,

    /// Usernames that liked the post.
    #[serde(default)]
    pub likes: Vec<String>,
}

fn default_post_state() -> String {
    "borrador".to_string()
}

impl Post {
    /// Returns the number of likes.
    pub fn likes_count(&self) -> usize {
        self.likes.len()
    }

    /// Returns true if `username` liked the post.
    pub fn is_liked_by(&self, username: &str) -> bool {
        self.likes.iter().any(|u| u == username)
    }
}

impl Record for Post {
    fn field(&self, name: &str) -> Value<'_> {
        match name {
            "id" => Value::String(&self.id),
            "titulo" => Value::String(&self.titulo),
            "contenido" => Value::String(&self.contenido),
            "autor" => Value::String(&self.autor),
            "etiquetas" => Value::strings(&self.etiquetas),
            "categoriaId" => self.categoria_id.as_deref().into(),
            "estado" => Value::String(&self.estado),
            "fechaCreacion" => Value::String(&self.fecha_creacion),
            "fechaActualizacion" => self.fecha_actualizacion.as_deref().into(),
            "visitas" => Value::from(self.visitas),
            "likes" => Value::strings(&self.likes),
            "likesCount" => Value::from(self.likes_count() as u64),
            _ => Value::Absent,
        }
    }
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment ID.
    pub id: String,

    /// The post this comment belongs to.
    pub post_id: String,

    /// Display name of the author.
    pub autor: String,

    /// Optional contact email.
    #[serde(default)]
    pub email: Option<String>,

    /// Comment text.
    pub contenido: String,

    /// Moderation state ("pendiente", "aprobado", "rechazado").
    #[serde(default = "default_comment_state")]
    pub estado: String,

    /// Creation timestamp (ISO 8601).
    pub fecha_creacion: String,

    /// Usernames that liked the comment.
    #[serde(default)]
    pub likes: Vec<String>,
}

fn default_comment_state() -> String {
    "pendiente".to_string()
}

impl Comment {
    /// Returns the number of likes.
    pub fn likes_count(&self) -> usize {
        self.likes.len()
    }

    /// Returns true if `username` liked the comment.
    pub fn is_liked_by(&self, username: &str) -> bool {
        self.likes.iter().any(|u| u == username)
    }
}

impl Record for Comment {
    fn field(&self, name: &str) -> Value<'_> {
        match name {
            "id" => Value::String(&self.id),
            "postId" => Value::String(&self.post_id),
            "autor" => Value::String(&self.autor),
            "email" => self.email.as_deref().into(),
            "contenido" => Value::String(&self.contenido),
            "estado" => Value::String(&self.estado),
            "fechaCreacion" => Value::String(&self.fecha_creacion),
            "likes" => Value::strings(&self.likes),
            "likesCount" => Value::from(self.likes_count() as u64),
            _ => Value::Absent,
        }
    }
}

/// A post category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: String,
    pub fecha_creacion: String,
}

impl Record for Category {
    fn field(&self, name: &str) -> Value<'_> {
        match name {
            "id" => Value::String(&self.id),
            "nombre" => Value::String(&self.nombre),
            "descripcion" => Value::String(&self.descripcion),
            "fechaCreacion" => Value::String(&self.fecha_creacion),
            _ => Value::Absent,
        }
    }
}
