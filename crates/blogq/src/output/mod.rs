//! Output formatting utilities for the blogq CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//!
//! - [`posts`] - Post listing and post detail output
//! - [`comments`] - Comment listing output
//! - [`stats`] - Blog statistics output
//! - [`query`] - Parsed query output
//! - [`helpers`] - Common formatting utilities (truncation, dates, states)

mod comments;
pub mod helpers;
mod posts;
mod query;
mod stats;

pub use comments::{format_comments_json, format_comments_table};
pub use posts::{
    format_post_detail_json, format_post_detail_table, format_posts_json, format_posts_table,
};
pub use query::{format_parsed_query_json, format_parsed_query_table};
pub use stats::{format_stats_json, format_stats_table};
