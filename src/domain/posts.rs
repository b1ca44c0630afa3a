//! The Post Store: a fixed collection of blog post records baked into the
//! binary at compile time. Records are never created, updated or deleted at
//! runtime; every view of the store is derived by filtering or re-ordering
//! references into [`POSTS`].

mod data;

use std::{fmt, num::ParseIntError, str::FromStr};

use once_cell::sync::Lazy;
use time::{Date, format_description::FormatItem, macros::format_description};

pub use data::POSTS;

pub const HUMAN_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

/// Stable positive identifier of a blog post, used for routing and lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(u32);

impl PostId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PostIdParseError {
    #[error("post id is not a number: {0}")]
    NotANumber(#[from] ParseIntError),
    #[error("post id must be positive")]
    Zero,
}

impl FromStr for PostId {
    type Err = PostIdParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value: u32 = raw.parse()?;
        if value == 0 {
            return Err(PostIdParseError::Zero);
        }
        Ok(Self(value))
    }
}

#[derive(Clone)]
pub struct Author {
    pub name: &'static str,
    pub avatar_url: &'static str,
    pub role: &'static str,
}

#[derive(Clone)]
pub struct Post {
    pub id: PostId,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub body: &'static str,
    pub category: &'static str,
    pub author: Author,
    pub published_on: Date,
    pub read_time: &'static str,
    pub image_url: &'static str,
    pub tags: &'static [&'static str],
    pub views: u64,
    pub likes: u64,
    pub featured: bool,
}

pub fn all() -> &'static [Post] {
    &POSTS
}

pub fn find_by_id(id: PostId) -> Option<&'static Post> {
    POSTS.iter().find(|post| post.id == id)
}

/// Distinct category labels in first-appearance order.
pub fn categories() -> &'static [&'static str] {
    static CATEGORIES: Lazy<Vec<&'static str>> = Lazy::new(|| {
        let mut labels = Vec::new();
        for post in POSTS.iter() {
            if !labels.contains(&post.category) {
                labels.push(post.category);
            }
        }
        labels
    });
    &CATEGORIES
}

pub fn distinct_author_count() -> usize {
    let mut names: Vec<&str> = POSTS.iter().map(|post| post.author.name).collect();
    names.sort_unstable();
    names.dedup();
    names.len()
}

/// Full store sorted by publication date, newest first. Ties keep store order.
pub fn recent() -> Vec<&'static Post> {
    let mut posts: Vec<&Post> = POSTS.iter().collect();
    posts.sort_by(|a, b| b.published_on.cmp(&a.published_on));
    posts
}

/// Posts flagged for promotional display, in store order.
pub fn featured() -> Vec<&'static Post> {
    POSTS.iter().filter(|post| post.featured).collect()
}

pub fn format_human_date(date: Date) -> String {
    date.format(HUMAN_DATE_FORMAT).expect("valid calendar date")
}
