//! Denormalized views returned to callers
//!
//! Relation fields use two layers of `Option`:
//! the outer one is `None` when the caller did not request the relation (the
//! field is then omitted from the serialized output), the inner one is `None`
//! when a requested single reference dangles (serialized as `null`).
//!
//! Nested entries are bare views: scalar fields only, no relations and no id
//! lists, so a key has the same shape at every depth and views never recurse
//! between users, posts and comments. The one exception is a post's comments,
//! which carry their (bare) author.

use crate::core::types::{Comment, CommentId, Post, PostId, User, UserId};
use serde::Serialize;

/// A user with its requested relations inlined
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    /// User id
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Posts authored by the user, in post order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<PostView>>,
    /// Users whose following list contains this user, in user order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub followers: Option<Vec<UserView>>,
    /// Users this user follows, in user order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following: Option<Vec<UserView>>,
}

/// A post with its requested relations inlined
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostView {
    /// Post id
    pub id: PostId,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// The author, `Some(None)` when the author id dangles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Option<UserView>>,
    /// One slot per like, `None` where the user id dangles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<Vec<Option<UserView>>>,
    /// One slot per attached comment, `None` where the comment id dangles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Option<CommentView>>>,
}

/// A comment with its requested relations inlined
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    /// Comment id
    pub id: CommentId,
    /// Comment body
    pub content: String,
    /// The author, `Some(None)` when the author id dangles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Option<UserView>>,
}

impl UserView {
    /// View of `user` with no relations inlined
    pub fn bare(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            posts: None,
            followers: None,
            following: None,
        }
    }

    /// Ids of the inlined followers, empty when not requested
    pub fn follower_ids(&self) -> Vec<&str> {
        ids(self.followers.as_deref())
    }

    /// Ids of the inlined followed users, empty when not requested
    pub fn following_ids(&self) -> Vec<&str> {
        ids(self.following.as_deref())
    }
}

impl PostView {
    /// View of `post` with no relations inlined
    pub fn bare(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
            author: None,
            likes: None,
            comments: None,
        }
    }
}

impl CommentView {
    /// View of `comment` with no relations inlined
    pub fn bare(comment: &Comment) -> Self {
        Self {
            id: comment.id.clone(),
            content: comment.content.clone(),
            author: None,
        }
    }
}

fn ids(users: Option<&[UserView]>) -> Vec<&str> {
    users
        .unwrap_or_default()
        .iter()
        .map(|user| user.id.as_str())
        .collect()
}
