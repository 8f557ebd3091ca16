//! End-to-end scenarios against the operation handlers

use social_graph::graph::{CommentRelations, PostRelations, UserRelations};
use social_graph::{Handlers, MemStore};

fn handlers() -> Handlers {
    Handlers::new(MemStore::new().into_shared())
}

fn add_alice_and_bob(handlers: &Handlers) -> (String, String) {
    let alice = handlers
        .add_user("Alice", "alice@example.com", UserRelations::NONE)
        .unwrap();
    let bob = handlers
        .add_user("Bob", "bob@example.com", UserRelations::NONE)
        .unwrap();
    (alice.id, bob.id)
}

#[test]
fn follow_is_visible_from_both_sides() {
    let handlers = handlers();
    let (alice, bob) = add_alice_and_bob(&handlers);

    handlers.follow_user(&alice, &bob, UserRelations::ALL).unwrap();

    let alice_view = handlers.get_user(&alice, UserRelations::ALL).unwrap();
    let following: Vec<_> = alice_view.following.unwrap().into_iter().map(|u| u.name).collect();
    assert_eq!(following, ["Bob"]);

    let bob_view = handlers.get_user(&bob, UserRelations::ALL).unwrap();
    let followers: Vec<_> = bob_view.followers.unwrap().into_iter().map(|u| u.name).collect();
    assert_eq!(followers, ["Alice"]);
    assert_eq!(bob_view.following, Some(Vec::new()));
}

#[test]
fn double_like_is_recorded_once() {
    let handlers = handlers();
    let (alice, bob) = add_alice_and_bob(&handlers);

    let post = handlers.add_post("T", "C", &alice, PostRelations::NONE).unwrap();
    handlers.like_post(&post.id, &bob, PostRelations::NONE).unwrap();
    handlers.like_post(&post.id, &bob, PostRelations::NONE).unwrap();

    let view = handlers.get_post(&post.id, PostRelations::ALL).unwrap();
    let likes = view.likes.unwrap();
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].as_ref().unwrap().id, bob);
}

#[test]
fn comment_author_resolves_through_post() {
    let handlers = handlers();
    let (alice, bob) = add_alice_and_bob(&handlers);

    let post = handlers.add_post("T", "C", &alice, PostRelations::NONE).unwrap();
    let comment = handlers
        .add_comment(&post.id, &bob, "nice", CommentRelations::ALL)
        .unwrap();
    assert_eq!(comment.author.clone().unwrap().unwrap().name, "Bob");

    let view = handlers.get_post(&post.id, PostRelations::ALL).unwrap();
    let comments = view.comments.unwrap();
    assert_eq!(comments.len(), 1);
    let resolved = comments[0].as_ref().unwrap();
    assert_eq!(resolved.id, comment.id);
    assert_eq!(resolved.content, "nice");
    assert_eq!(resolved.author.as_ref().unwrap().as_ref().unwrap().name, "Bob");
}

#[test]
fn missing_post_is_absent_not_an_error() {
    let handlers = handlers();
    add_alice_and_bob(&handlers);
    assert!(handlers.get_post("999", PostRelations::ALL).is_none());
    assert!(handlers.get_user("999", UserRelations::ALL).is_none());
}

#[test]
fn ids_are_stable_and_never_reused() {
    let handlers = handlers();
    let (alice, bob) = add_alice_and_bob(&handlers);
    let carol = handlers
        .add_user("Carol", "carol@example.com", UserRelations::NONE)
        .unwrap();

    assert_eq!([alice.as_str(), bob.as_str(), carol.id.as_str()], ["0", "1", "2"]);
    assert_eq!(handlers.get_user(&alice, UserRelations::NONE).unwrap().name, "Alice");

    let post = handlers.add_post("T", "C", &alice, PostRelations::NONE).unwrap();
    let comment = handlers.add_comment(&post.id, &bob, "x", CommentRelations::NONE).unwrap();
    assert_eq!(post.id, "0");
    assert_eq!(comment.id, "0");
}

#[test]
fn list_operations_follow_insertion_order() {
    let handlers = handlers();
    let (alice, bob) = add_alice_and_bob(&handlers);
    handlers.add_post("first", "", &bob, PostRelations::NONE).unwrap();
    handlers.add_post("second", "", &alice, PostRelations::NONE).unwrap();

    let users: Vec<_> = handlers
        .list_users(UserRelations::NONE)
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(users, ["Alice", "Bob"]);

    let posts = handlers.list_posts(PostRelations::ALL);
    assert_eq!(posts[0].title, "first");
    assert_eq!(posts[1].author.as_ref().unwrap().as_ref().unwrap().name, "Alice");
}

#[test]
fn dangling_author_does_not_fault() {
    let handlers = handlers();
    let post = handlers.add_post("T", "C", "404", PostRelations::NONE).unwrap();

    let view = handlers.get_post(&post.id, PostRelations::ALL).unwrap();
    assert_eq!(view.author, Some(None));

    let json = serde_json::to_value(&view).unwrap();
    assert!(json["author"].is_null());
}

#[test]
fn nested_keys_keep_one_shape_at_every_depth() {
    let handlers = handlers();
    let (alice, bob) = add_alice_and_bob(&handlers);
    handlers.follow_user(&bob, &alice, UserRelations::NONE).unwrap();
    let post = handlers.add_post("T", "C", &alice, PostRelations::NONE).unwrap();
    handlers.like_post(&post.id, &bob, PostRelations::NONE).unwrap();
    handlers.add_comment(&post.id, &bob, "nice", CommentRelations::NONE).unwrap();

    let post = serde_json::to_value(handlers.get_post(&post.id, PostRelations::ALL)).unwrap();
    assert!(post["likes"][0].get("following").is_none());
    assert_eq!(post["likes"][0]["name"], "Bob");

    let alice = serde_json::to_value(handlers.get_user(&alice, UserRelations::ALL)).unwrap();
    let nested_post = alice["posts"][0].as_object().unwrap();
    assert!(!nested_post.contains_key("author"));
    assert!(!nested_post.contains_key("likes"));
    assert!(!nested_post.contains_key("comments"));
    assert!(alice["followers"][0].get("following").is_none());
}
