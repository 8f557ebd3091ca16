//! Read-only operations

use super::Handlers;
use crate::graph::{PostRelations, PostView, Resolver, UserRelations, UserView};

impl Handlers {
    /// `getUser`: the user with `id`, or `None`
    pub fn get_user(&self, id: &str, relations: UserRelations) -> Option<UserView> {
        let store = self.store.read();
        let resolver = Resolver::new(&store);
        let view = store
            .users
            .find_by_id(id)
            .map(|user| resolver.resolve_user(user, relations));
        tracing::debug!(id, found = view.is_some(), "getUser");
        view
    }

    /// `listUsers`: every user in insertion order
    pub fn list_users(&self, relations: UserRelations) -> Vec<UserView> {
        let store = self.store.read();
        let resolver = Resolver::new(&store);
        store
            .users
            .all()
            .map(|user| resolver.resolve_user(user, relations))
            .collect()
    }

    /// `getPost`: the post with `id`, or `None`
    pub fn get_post(&self, id: &str, relations: PostRelations) -> Option<PostView> {
        let store = self.store.read();
        let resolver = Resolver::new(&store);
        let view = store
            .posts
            .find_by_id(id)
            .map(|post| resolver.resolve_post(post, relations));
        tracing::debug!(id, found = view.is_some(), "getPost");
        view
    }

    /// `listPosts`: every post in insertion order
    pub fn list_posts(&self, relations: PostRelations) -> Vec<PostView> {
        let store = self.store.read();
        let resolver = Resolver::new(&store);
        store
            .posts
            .all()
            .map(|post| resolver.resolve_post(post, relations))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStore;

    fn seeded() -> Handlers {
        let mut store = MemStore::new();
        store.seed_demo_data();
        Handlers::new(store.into_shared())
    }

    #[test]
    fn get_missing_entities_is_absent() {
        let handlers = seeded();
        assert!(handlers.get_post("999", PostRelations::ALL).is_none());
        assert!(handlers.get_user("999", UserRelations::ALL).is_none());
    }

    #[test]
    fn get_user_includes_authored_posts() {
        let handlers = seeded();
        let alice = handlers.get_user("0", UserRelations::ALL).unwrap();
        assert_eq!(alice.name, "Alice");
        assert_eq!(alice.posts.unwrap()[0].title, "First Post");
        assert_eq!(alice.followers, Some(Vec::new()));
    }

    #[test]
    fn list_queries_follow_insertion_order() {
        let handlers = seeded();
        let names: Vec<_> = handlers
            .list_users(UserRelations::NONE)
            .into_iter()
            .map(|u| u.name)
            .collect();
        assert_eq!(names, ["Alice", "Bob"]);

        let posts = handlers.list_posts(PostRelations::ALL);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author.as_ref().unwrap().as_ref().unwrap().name, "Alice");
    }

    #[test]
    fn repeated_reads_are_stable() {
        let handlers = seeded();
        let first = handlers.get_post("0", PostRelations::ALL);
        let second = handlers.get_post("0", PostRelations::ALL);
        assert_eq!(first, second);
        assert_eq!(handlers.store().read().posts.find_by_id("0").unwrap().author, "0");
    }
}
