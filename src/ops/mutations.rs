//! Mutating operations
//!
//! Writes are append-only: new records, or new entries at the end of a
//! record's `following`, `likes` or `comments` list.

use super::Handlers;
use crate::core::error::{Error, Result};
use crate::core::types::{Comment, Post, Record, User};
use crate::graph::{
    CommentRelations, CommentView, PostRelations, PostView, Resolver, UserRelations, UserView,
};

impl Handlers {
    /// `addUser`: create a user. Name and email must contain a non-whitespace
    /// character.
    pub fn add_user(&self, name: &str, email: &str, relations: UserRelations) -> Result<UserView> {
        require_non_blank("name", name)?;
        require_non_blank("email", email)?;

        let mut store = self.store.write();
        let id = store.users.insert(User::new(name, email)).id.clone();
        tracing::info!(user_id = %id, "User added");

        let resolver = Resolver::new(&store);
        let user = stored(store.users.find_by_id(&id), &id)?;
        Ok(resolver.resolve_user(user, relations))
    }

    /// `addPost`: create a post. The author id is not checked.
    pub fn add_post(
        &self,
        title: &str,
        content: &str,
        author_id: &str,
        relations: PostRelations,
    ) -> Result<PostView> {
        let mut store = self.store.write();
        let id = store.posts.insert(Post::new(title, content, author_id)).id.clone();
        if store.users.find_by_id(author_id).is_none() {
            tracing::warn!(post_id = %id, author_id, "Post added with unknown author");
        } else {
            tracing::info!(post_id = %id, author_id, "Post added");
        }

        let resolver = Resolver::new(&store);
        let post = stored(store.posts.find_by_id(&id), &id)?;
        Ok(resolver.resolve_post(post, relations))
    }

    /// `likePost`: record a like. Fails when the post does not exist; the user
    /// id is not checked. Liking twice is a no-op.
    pub fn like_post(
        &self,
        post_id: &str,
        user_id: &str,
        relations: PostRelations,
    ) -> Result<PostView> {
        let mut store = self.store.write();
        let post = store
            .posts
            .find_by_id_mut(post_id)
            .ok_or_else(|| Error::not_found(Post::KIND, post_id))?;

        if post.add_like(user_id) {
            tracing::info!(post_id, user_id, "Post liked");
        } else {
            tracing::debug!(post_id, user_id, "Post already liked");
        }

        let resolver = Resolver::new(&store);
        let post = stored(store.posts.find_by_id(post_id), post_id)?;
        Ok(resolver.resolve_post(post, relations))
    }

    /// `addComment`: create a comment and attach it to the post when the post
    /// exists. A missing post leaves the comment unattached.
    pub fn add_comment(
        &self,
        post_id: &str,
        user_id: &str,
        content: &str,
        relations: CommentRelations,
    ) -> Result<CommentView> {
        let mut store = self.store.write();
        let id = store.comments.insert(Comment::new(content, user_id)).id.clone();

        match store.posts.find_by_id_mut(post_id) {
            Some(post) => {
                post.attach_comment(&id);
                tracing::info!(comment_id = %id, post_id, "Comment added");
            }
            None => {
                tracing::warn!(comment_id = %id, post_id, "Comment added to unknown post, left unattached");
            }
        }

        let resolver = Resolver::new(&store);
        let comment = stored(store.comments.find_by_id(&id), &id)?;
        Ok(resolver.resolve_comment(comment, relations))
    }

    /// `followUser`: make `follower_id` follow `following_id`.
    ///
    /// Fails when the follower does not exist. When the followed user does not
    /// exist nothing changes and the follower is returned as is. Following
    /// twice is a no-op.
    pub fn follow_user(
        &self,
        follower_id: &str,
        following_id: &str,
        relations: UserRelations,
    ) -> Result<UserView> {
        let mut store = self.store.write();
        if store.users.find_by_id(follower_id).is_none() {
            return Err(Error::not_found(User::KIND, follower_id));
        }

        if store.users.find_by_id(following_id).is_none() {
            tracing::warn!(follower_id, following_id, "Follow target not found, ignoring");
        } else if let Some(follower) = store.users.find_by_id_mut(follower_id) {
            if follower.follow(following_id) {
                tracing::info!(follower_id, following_id, "User followed");
            }
        }

        let resolver = Resolver::new(&store);
        let follower = stored(store.users.find_by_id(follower_id), follower_id)?;
        Ok(resolver.resolve_user(follower, relations))
    }
}

fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("`{}` must not be blank", field)));
    }
    Ok(())
}

// Re-reads a record the handler just wrote while holding the write lock.
fn stored<'a, T: Record>(record: Option<&'a T>, id: &str) -> Result<&'a T> {
    record.ok_or_else(|| Error::not_found(T::KIND, id))
}
