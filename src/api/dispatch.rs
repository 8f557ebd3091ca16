//! Named-operation dispatcher
//!
//! Maps a JSON request envelope onto the operation handlers:
//!
//! ```json
//! { "operation": "likePost", "arguments": { "postId": "0", "userId": "1" }, "select": ["likes"] }
//! ```
//!
//! `arguments` and `select` are optional. Without `select` every relation of
//! the returned type is resolved.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::error::{Error, Result};
use crate::graph::{CommentRelations, PostRelations, UserRelations};
use crate::ops::Handlers;

/// Operations exposed by the dispatcher, by wire name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `getUser(id)`
    GetUser,
    /// `listUsers`
    ListUsers,
    /// `getPost(id)`
    GetPost,
    /// `listPosts`
    ListPosts,
    /// `addUser(name, email)`
    AddUser,
    /// `addPost(title, content, authorId)`
    AddPost,
    /// `likePost(postId, userId)`
    LikePost,
    /// `addComment(postId, userId, content)`
    AddComment,
    /// `followUser(followerId, followingId)`
    FollowUser,
}

impl Operation {
    /// Every operation, queries first
    pub const ALL: [Operation; 9] = [
        Operation::GetUser,
        Operation::ListUsers,
        Operation::GetPost,
        Operation::ListPosts,
        Operation::AddUser,
        Operation::AddPost,
        Operation::LikePost,
        Operation::AddComment,
        Operation::FollowUser,
    ];

    /// Wire name of the operation
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::GetUser => "getUser",
            Operation::ListUsers => "listUsers",
            Operation::GetPost => "getPost",
            Operation::ListPosts => "listPosts",
            Operation::AddUser => "addUser",
            Operation::AddPost => "addPost",
            Operation::LikePost => "likePost",
            Operation::AddComment => "addComment",
            Operation::FollowUser => "followUser",
        }
    }

    /// Whether the operation writes to the store
    pub fn is_mutation(self) -> bool {
        !matches!(
            self,
            Operation::GetUser | Operation::ListUsers | Operation::GetPost | Operation::ListPosts
        )
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == name)
            .ok_or_else(|| Error::UnknownOperation(name.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dispatcher request envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationRequest {
    /// Wire name of the operation
    pub operation: String,
    /// Named arguments
    #[serde(default)]
    pub arguments: Map<String, Value>,
    /// Relations to resolve on the returned value
    #[serde(default)]
    pub select: Option<Vec<String>>,
}

impl OperationRequest {
    /// Request for `operation` with no arguments and the default selection
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            ..Self::default()
        }
    }

    /// Add a string argument
    pub fn arg(mut self, name: &str, value: impl Into<String>) -> Self {
        self.arguments
            .insert(name.to_string(), Value::String(value.into()));
        self
    }

    /// Restrict the resolved relations
    pub fn select<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

struct Arguments<'a>(&'a Map<String, Value>);

impl<'a> Arguments<'a> {
    fn required(&self, name: &str) -> Result<&'a str> {
        match self.0.get(name) {
            Some(Value::String(value)) => Ok(value.as_str()),
            Some(_) => Err(Error::validation(format!("argument `{}` must be a string", name))),
            None => Err(Error::validation(format!("missing required argument `{}`", name))),
        }
    }
}

/// Run one request against `handlers` and serialize the result
///
/// Queries for a missing id yield `null`; mutation failures are returned as
/// errors.
pub fn dispatch(handlers: &Handlers, request: &OperationRequest) -> Result<Value> {
    let operation: Operation = request.operation.parse()?;
    let args = Arguments(&request.arguments);
    let select = request.select.as_deref();

    tracing::debug!(%operation, "Dispatching operation");

    let value = match operation {
        Operation::GetUser => {
            let id = args.required("id")?;
            serde_json::to_value(handlers.get_user(id, UserRelations::from_selection(select)?))?
        }
        Operation::ListUsers => {
            serde_json::to_value(handlers.list_users(UserRelations::from_selection(select)?))?
        }
        Operation::GetPost => {
            let id = args.required("id")?;
            serde_json::to_value(handlers.get_post(id, PostRelations::from_selection(select)?))?
        }
        Operation::ListPosts => {
            serde_json::to_value(handlers.list_posts(PostRelations::from_selection(select)?))?
        }
        Operation::AddUser => {
            let name = args.required("name")?;
            let email = args.required("email")?;
            let relations = UserRelations::from_selection(select)?;
            serde_json::to_value(handlers.add_user(name, email, relations)?)?
        }
        Operation::AddPost => {
            let title = args.required("title")?;
            let content = args.required("content")?;
            let author_id = args.required("authorId")?;
            let relations = PostRelations::from_selection(select)?;
            serde_json::to_value(handlers.add_post(title, content, author_id, relations)?)?
        }
        Operation::LikePost => {
            let post_id = args.required("postId")?;
            let user_id = args.required("userId")?;
            let relations = PostRelations::from_selection(select)?;
            serde_json::to_value(handlers.like_post(post_id, user_id, relations)?)?
        }
        Operation::AddComment => {
            let post_id = args.required("postId")?;
            let user_id = args.required("userId")?;
            let content = args.required("content")?;
            let relations = CommentRelations::from_selection(select)?;
            serde_json::to_value(handlers.add_comment(post_id, user_id, content, relations)?)?
        }
        Operation::FollowUser => {
            let follower_id = args.required("followerId")?;
            let following_id = args.required("followingId")?;
            let relations = UserRelations::from_selection(select)?;
            serde_json::to_value(handlers.follow_user(follower_id, following_id, relations)?)?
        }
    };

    Ok(value)
}
