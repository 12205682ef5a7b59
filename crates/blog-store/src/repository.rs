//! Sources of post snapshots.
//!
//! The listing pipeline and the query engine never own storage; they read a
//! snapshot handed out by a [`PostRepository`].

use crate::models::{Category, Comment, Post};
use crate::store::{PostStore, Result};
use crate::BlogData;

/// Supplies snapshots of posts, comments and categories.
pub trait PostRepository {
    /// Returns a snapshot of all posts, in storage order.
    fn posts(&self) -> Result<Vec<Post>>;

    /// Returns a snapshot of all comments, in storage order.
    fn comments(&self) -> Result<Vec<Comment>>;

    /// Returns the comments on the given post.
    fn comments_for(&self, post_id: &str) -> Result<Vec<Comment>> {
        let mut comments = self.comments()?;
        comments.retain(|c| c.post_id == post_id);
        Ok(comments)
    }

    /// Returns all categories.
    fn categories(&self) -> Result<Vec<Category>>;

    /// Returns the category with the given ID.
    fn category(&self, id: &str) -> Result<Option<Category>> {
        Ok(self.categories()?.into_iter().find(|c| c.id == id))
    }
}

/// Repository backed by data held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    data: BlogData,
}

impl MemoryRepository {
    /// Creates a repository over the given data.
    pub fn new(data: BlogData) -> Self {
        Self { data }
    }

    /// Creates a repository holding only posts.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self::new(BlogData {
            posts,
            ..BlogData::default()
        })
    }

    /// Returns the underlying data.
    pub fn data(&self) -> &BlogData {
        &self.data
    }
}

impl PostRepository for MemoryRepository {
    fn posts(&self) -> Result<Vec<Post>> {
        Ok(self.data.posts.clone())
    }

    fn comments(&self) -> Result<Vec<Comment>> {
        Ok(self.data.comments.clone())
    }

    fn comments_for(&self, post_id: &str) -> Result<Vec<Comment>> {
        Ok(self.data.comments_for(post_id).cloned().collect())
    }

    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.data.categories.clone())
    }

    fn category(&self, id: &str) -> Result<Option<Category>> {
        Ok(self.data.category(id).cloned())
    }
}

/// Reads the data file on every call, so each snapshot reflects the file's
/// current contents. A missing file reads as empty.
impl PostRepository for PostStore {
    fn posts(&self) -> Result<Vec<Post>> {
        Ok(self.load_or_default()?.posts)
    }

    fn comments(&self) -> Result<Vec<Comment>> {
        Ok(self.load_or_default()?.comments)
    }

    fn categories(&self) -> Result<Vec<Category>> {
        Ok(self.load_or_default()?.categories)
    }
}
