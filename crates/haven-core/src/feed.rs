//! Anonymous community feed: posts, likes and the compose buffer.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::handles::anonymous_handle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub author: String,
    pub body: String,
    pub likes: u32,
    pub liked: bool,
    pub comments: u32,
    pub posted_at: DateTime<Utc>,
}

impl Post {
    /// Relative age label such as `Just now` or `2h ago`.
    #[must_use]
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        relative_label(self.posted_at, now)
    }
}

/// Format the distance between `then` and `now` the way the feed shows it.
#[must_use]
pub fn relative_label(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    if elapsed < Duration::minutes(1) {
        return "Just now".to_owned();
    }
    if elapsed < Duration::hours(1) {
        return format!("{}m ago", elapsed.num_minutes());
    }
    if elapsed < Duration::days(1) {
        return format!("{}h ago", elapsed.num_hours());
    }
    format!("{}d ago", elapsed.num_days())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Posted { id: String },
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeOutcome {
    Liked { likes: u32 },
    Unliked { likes: u32 },
    UnknownPost,
}

/// Feed state: posts ordered most-recent-first plus one draft buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedState {
    posts: Vec<Post>,
    draft: String,
}

impl FeedState {
    #[must_use]
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            draft: String::new(),
        }
    }

    /// The two community posts every session starts with.
    #[must_use]
    pub fn with_sample_posts(now: DateTime<Utc>) -> Self {
        Self::new(vec![
            Post {
                id: "1".to_owned(),
                author: "Shamper@".to_owned(),
                body: "Hi, I was abused by my bf of 2 years. I don't know how to deal with it"
                    .to_owned(),
                likes: 23,
                liked: false,
                comments: 5,
                posted_at: now - Duration::hours(2),
            },
            Post {
                id: "2".to_owned(),
                author: "Stranger@93".to_owned(),
                body: "Hi, I was at a petrol station at Rand east, there is a guy there trying to kiss women who drive in"
                    .to_owned(),
                likes: 156,
                liked: false,
                comments: 12,
                posted_at: now - Duration::hours(4),
            },
        ])
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    #[must_use]
    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_owned();
    }

    pub fn push_char(&mut self, ch: char) {
        self.draft.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.draft.pop();
    }

    /// Publish the draft as a new post at the top of the feed.
    ///
    /// Whitespace-only drafts are ignored and left in place.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R, now: DateTime<Utc>) -> SubmitOutcome {
        let body = self.draft.trim();
        if body.is_empty() {
            return SubmitOutcome::Empty;
        }
        let id = uuid::Uuid::new_v4().to_string();
        let post = Post {
            id: id.clone(),
            author: anonymous_handle(rng),
            body: body.to_owned(),
            likes: 0,
            liked: false,
            comments: 0,
            posted_at: now,
        };
        self.posts.insert(0, post);
        self.draft.clear();
        SubmitOutcome::Posted { id }
    }

    /// Flip the liked flag of one post and move its counter by one.
    pub fn toggle_like(&mut self, id: &str) -> LikeOutcome {
        let Some(post) = self.posts.iter_mut().find(|post| post.id == id) else {
            return LikeOutcome::UnknownPost;
        };
        if post.liked {
            post.liked = false;
            post.likes = post.likes.saturating_sub(1);
            LikeOutcome::Unliked { likes: post.likes }
        } else {
            post.liked = true;
            post.likes = post.likes.saturating_add(1);
            LikeOutcome::Liked { likes: post.likes }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;

    fn fixed_now() -> DateTime<Utc> {
        match Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0) {
            chrono::LocalResult::Single(value) => value,
            _ => panic!("fixed timestamp should be valid"),
        }
    }

    #[test]
    fn sample_posts_are_newest_first() {
        let now = fixed_now();
        let feed = FeedState::with_sample_posts(now);
        let labels: Vec<String> = feed.posts().iter().map(|p| p.age_label(now)).collect();
        assert_eq!(labels, vec!["2h ago", "4h ago"]);
    }

    #[test]
    fn whitespace_draft_is_kept_but_not_posted() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let mut feed = FeedState::with_sample_posts(fixed_now());
        feed.set_draft(" \n\t ");
        assert_eq!(feed.submit(&mut rng, fixed_now()), SubmitOutcome::Empty);
        assert_eq!(feed.posts().len(), 2);
        assert_eq!(feed.draft(), " \n\t ");
    }

    #[test]
    fn submit_trims_body_and_clears_draft() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1);
        let mut feed = FeedState::default();
        for ch in "  stay safe ".chars() {
            feed.push_char(ch);
        }
        let outcome = feed.submit(&mut rng, fixed_now());
        assert!(matches!(outcome, SubmitOutcome::Posted { .. }));
        assert_eq!(feed.posts()[0].body, "stay safe");
        assert_eq!(feed.posts()[0].age_label(fixed_now()), "Just now");
        assert!(feed.draft().is_empty());
    }

    #[test]
    fn unknown_post_like_is_reported() {
        let mut feed = FeedState::with_sample_posts(fixed_now());
        assert_eq!(feed.toggle_like("nope"), LikeOutcome::UnknownPost);
    }

    #[test]
    fn relative_label_buckets() {
        let now = fixed_now();
        assert_eq!(relative_label(now - Duration::seconds(20), now), "Just now");
        assert_eq!(relative_label(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(relative_label(now - Duration::hours(3), now), "3h ago");
        assert_eq!(relative_label(now - Duration::days(2), now), "2d ago");
    }

    #[test]
    fn pop_char_edits_draft() {
        let mut feed = FeedState::default();
        feed.set_draft("hey!");
        feed.pop_char();
        assert_eq!(feed.draft(), "hey");
    }
}
