//! Normalized record types for the social graph
//!
//! Records reference each other only by id string. Nothing here embeds
//! another record; denormalized shapes live in [`crate::graph::views`].

use serde::{Deserialize, Serialize};

/// Identifier of a user record
pub type UserId = String;
/// Identifier of a post record
pub type PostId = String;
/// Identifier of a comment record
pub type CommentId = String;

/// A record that can live in a [`crate::storage::Collection`]
pub trait Record {
    /// Entity kind used in logs and errors
    const KIND: &'static str;

    /// The record's id
    fn id(&self) -> &str;

    /// Assign the id. Only the owning collection calls this, once, on insert.
    fn set_id(&mut self, id: String);
}

/// A user. Followers are derived from every other user's `following` list
/// and are never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Sequential id within the user collection
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Users this user follows, in the order they were followed
    pub following: Vec<UserId>,
}

/// A post authored by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Sequential id within the post collection
    pub id: PostId,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// Author user id (may dangle)
    pub author: UserId,
    /// Users who liked the post, in like order
    pub likes: Vec<UserId>,
    /// Comments attached to the post, in attach order
    pub comments: Vec<CommentId>,
}

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Sequential id within the comment collection
    pub id: CommentId,
    /// Comment body
    pub content: String,
    /// Author user id (may dangle)
    pub author: UserId,
}

impl User {
    /// New user with no id and an empty following list
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            email: email.into(),
            following: Vec::new(),
        }
    }

    /// Whether this user follows `user_id`
    pub fn follows(&self, user_id: &str) -> bool {
        self.following.iter().any(|id| id == user_id)
    }

    /// Follow `user_id`. Returns false when already following.
    pub fn follow(&mut self, user_id: &str) -> bool {
        if self.follows(user_id) {
            return false;
        }
        self.following.push(user_id.to_string());
        true
    }
}

impl Post {
    /// New post with no id, likes or comments
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<UserId>,
    ) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            content: content.into(),
            author: author.into(),
            likes: Vec::new(),
            comments: Vec::new(),
        }
    }

    /// Record a like from `user_id`. Returns false when already liked.
    pub fn add_like(&mut self, user_id: &str) -> bool {
        if self.likes.iter().any(|id| id == user_id) {
            return false;
        }
        self.likes.push(user_id.to_string());
        true
    }

    /// Attach a comment id to the end of the comment list
    pub fn attach_comment(&mut self, comment_id: &str) {
        self.comments.push(comment_id.to_string());
    }
}

impl Comment {
    /// New comment with no id
    pub fn new(content: impl Into<String>, author: impl Into<UserId>) -> Self {
        Self {
            id: String::new(),
            content: content.into(),
            author: author.into(),
        }
    }
}

impl Record for User {
    const KIND: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Record for Post {
    const KIND: &'static str = "Post";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

impl Record for Comment {
    const KIND: &'static str = "Comment";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
