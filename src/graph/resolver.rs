//! Relation resolver
//!
//! Joins are computed at read time from the three collections. There are no
//! stored indexes, so every lookup is a scan or a positional id lookup and
//! derived relations (followers) always reflect the current store.
//!
//! The follow relation has exactly one source of truth: "X follows Y" iff
//! `Y.id` is in `X.following`. Both `following(X)` and `followers(Y)` are
//! derived from it.

use crate::core::types::{Comment, Post, User};
use crate::graph::relations::{CommentRelations, PostRelations, UserRelations};
use crate::graph::views::{CommentView, PostView, UserView};
use crate::storage::MemStore;

/// Read-only resolver over a borrowed store snapshot
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    store: &'a MemStore,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over `store`
    pub fn new(store: &'a MemStore) -> Self {
        Self { store }
    }

    /// Bare view of a user, `None` when the id dangles
    pub fn user(&self, id: &str) -> Option<UserView> {
        self.store.users.find_by_id(id).map(UserView::bare)
    }

    /// Posts authored by `user_id`, in post order
    pub fn posts_by<'b>(&self, user_id: &'b str) -> impl Iterator<Item = &'a Post> + 'b
    where
        'a: 'b,
    {
        let store = self.store;
        store.posts.all().filter(move |post| post.author == user_id)
    }

    /// Users whose following list contains `user_id`, in user order
    pub fn followers_of<'b>(&self, user_id: &'b str) -> impl Iterator<Item = &'a User> + 'b
    where
        'a: 'b,
    {
        let store = self.store;
        store.users.all().filter(move |user| user.follows(user_id))
    }

    /// Users that `user` follows, in user order. Dangling ids are dropped.
    pub fn followed_by<'b>(&self, user: &'b User) -> impl Iterator<Item = &'a User> + 'b
    where
        'a: 'b,
    {
        let store = self.store;
        store.users.all().filter(move |candidate| user.follows(&candidate.id))
    }

    /// Denormalize a user
    pub fn resolve_user(&self, user: &User, relations: UserRelations) -> UserView {
        let mut view = UserView::bare(user);

        if relations.posts {
            view.posts = Some(self.posts_by(&user.id).map(PostView::bare).collect());
        }

        if relations.followers {
            view.followers = Some(self.followers_of(&user.id).map(UserView::bare).collect());
        }

        if relations.following {
            view.following = Some(self.followed_by(user).map(UserView::bare).collect());
        }

        view
    }

    /// Denormalize a post
    pub fn resolve_post(&self, post: &Post, relations: PostRelations) -> PostView {
        let mut view = PostView::bare(post);

        if relations.author {
            view.author = Some(self.user(&post.author));
        }

        if relations.likes {
            view.likes = Some(post.likes.iter().map(|id| self.user(id)).collect());
        }

        if relations.comments {
            view.comments = Some(
                post.comments
                    .iter()
                    .map(|id| {
                        self.store
                            .comments
                            .find_by_id(id)
                            .map(|comment| self.resolve_comment(comment, CommentRelations::ALL))
                    })
                    .collect(),
            );
        }

        view
    }

    /// Denormalize a comment
    pub fn resolve_comment(&self, comment: &Comment, relations: CommentRelations) -> CommentView {
        let mut view = CommentView::bare(comment);

        if relations.author {
            view.author = Some(self.user(&comment.author));
        }

        view
    }
}
