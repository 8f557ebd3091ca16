use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use social_graph::core::{Post, User};
use social_graph::graph::{PostRelations, Resolver, UserRelations};
use social_graph::MemStore;

fn store_with(users: usize) -> MemStore {
    let mut store = MemStore::new();
    for i in 0..users {
        store.users.insert(User::new(format!("user{}", i), format!("user{}@example.com", i)));
    }
    for i in 0..users {
        let id = i.to_string();
        let next = ((i + 1) % users).to_string();
        if let Some(user) = store.users.find_by_id_mut(&id) {
            user.follow(&next);
        }
        let mut post = Post::new(format!("post{}", i), "body", id);
        post.add_like(&next);
        store.posts.insert(post);
    }
    store
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for users in [100, 1_000] {
        let store = store_with(users);
        let resolver = Resolver::new(&store);

        group.bench_with_input(BenchmarkId::new("user", users), &users, |b, _| {
            let user = store.users.find_by_id("0").unwrap();
            b.iter(|| black_box(resolver.resolve_user(user, UserRelations::ALL)))
        });

        group.bench_with_input(BenchmarkId::new("post", users), &users, |b, _| {
            let post = store.posts.find_by_id("0").unwrap();
            b.iter(|| black_box(resolver.resolve_post(post, PostRelations::ALL)))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
