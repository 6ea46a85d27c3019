#![allow(clippy::expect_used, clippy::unwrap_used)]

use chrono::{TimeZone, Utc};
use haven_core::feed::{FeedState, LikeOutcome, SubmitOutcome};
use haven_core::handles::is_anonymous_handle;
use rand::SeedableRng;

#[test]
fn whitespace_submit_leaves_posts_unchanged() {
    let now = Utc.with_ymd_and_hms(2026, 1, 10, 18, 0, 0).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    let mut feed = FeedState::with_sample_posts(now);
    let before = feed.posts().to_vec();

    feed.set_draft("  ");
    assert_eq!(feed.submit(&mut rng, now), SubmitOutcome::Empty);
    assert_eq!(feed.posts(), before.as_slice());
}

#[test]
fn submit_prepends_exactly_one_fresh_post() {
    let now = Utc.with_ymd_and_hms(2026, 1, 10, 18, 0, 0).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    let mut feed = FeedState::with_sample_posts(now);

    feed.set_draft("hello");
    let SubmitOutcome::Posted { id } = feed.submit(&mut rng, now) else {
        panic!("hello should post");
    };

    assert_eq!(feed.posts().len(), 3);
    let top = &feed.posts()[0];
    assert_eq!(top.id, id);
    assert_eq!(top.body, "hello");
    assert_eq!(top.likes, 0);
    assert_eq!(top.comments, 0);
    assert!(!top.liked);
    assert_eq!(top.age_label(now), "Just now");
    assert!(is_anonymous_handle(&top.author), "handle: {}", top.author);
    assert_eq!(feed.posts()[1].id, "1");
    assert!(feed.draft().is_empty());
}

#[test]
fn post_ids_are_unique_within_session() {
    let now = Utc.with_ymd_and_hms(2026, 1, 10, 18, 0, 0).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(11);
    let mut feed = FeedState::with_sample_posts(now);
    for n in 0..20 {
        feed.set_draft(&format!("post {n}"));
        feed.submit(&mut rng, now);
    }
    let mut ids: Vec<&str> = feed.posts().iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 22);
}

#[test]
fn like_round_trip() {
    let now = Utc.with_ymd_and_hms(2026, 1, 10, 18, 0, 0).unwrap();
    let mut feed = FeedState::with_sample_posts(now);
    let post = feed.post("1").expect("seed post");
    assert_eq!((post.likes, post.liked), (23, false));

    assert_eq!(feed.toggle_like("1"), LikeOutcome::Liked { likes: 24 });
    let post = feed.post("1").expect("seed post");
    assert_eq!((post.likes, post.liked), (24, true));

    assert_eq!(feed.toggle_like("1"), LikeOutcome::Unliked { likes: 23 });
    let post = feed.post("1").expect("seed post");
    assert_eq!((post.likes, post.liked), (23, false));

    assert_eq!(feed.post("2").expect("other post").likes, 156);
}
