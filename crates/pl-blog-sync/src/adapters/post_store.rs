//! In-Memory Post Store Adapter
//!
//! Implements the `PostStore` port with arena-style keyed storage: a
//! monotonic id counter per collection plus an id-to-entity map.
//!
//! In production this would be backed by the node's key-value store.

use crate::domain::{Post, PostId, SentPost, TimedoutPost};
use crate::ports::outbound::PostStore;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory post store.
pub struct InMemoryPostStore {
    posts: RwLock<HashMap<u64, Post>>,
    /// Next post id to assign.
    post_seq: RwLock<u64>,
    sent_posts: RwLock<HashMap<u64, SentPost>>,
    timedout: RwLock<Vec<TimedoutPost>>,
}

impl InMemoryPostStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
            post_seq: RwLock::new(1),
            sent_posts: RwLock::new(HashMap::new()),
            timedout: RwLock::new(Vec::new()),
        }
    }

    /// Number of unresolved sent-post shadows.
    pub fn sent_post_count(&self) -> u64 {
        self.sent_posts.read().len() as u64
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore for InMemoryPostStore {
    fn post(&self, id: PostId) -> Option<Post> {
        self.posts.read().get(&id.value()).cloned()
    }

    fn set_post(&self, post: Post) {
        self.posts.write().insert(post.id.value(), post);
    }

    fn append_post(&self, title: &str, content: &str, creator: &str) -> PostId {
        let mut seq = self.post_seq.write();
        let id = PostId::new(*seq);
        *seq += 1;

        self.posts.write().insert(
            id.value(),
            Post {
                id,
                title: title.to_string(),
                content: content.to_string(),
                creator: creator.to_string(),
            },
        );
        id
    }

    fn post_count(&self) -> u64 {
        self.posts.read().len() as u64
    }

    fn sent_post(&self, id: PostId) -> Option<SentPost> {
        self.sent_posts.read().get(&id.value()).cloned()
    }

    fn set_sent_post(&self, post: SentPost) {
        self.sent_posts.write().insert(post.id.value(), post);
    }

    fn append_sent_post(&self, post: SentPost) {
        // Last-writer-wins for the shadow of an already-pending post.
        self.sent_posts.write().insert(post.id.value(), post);
    }

    fn append_timedout_post(&self, post: TimedoutPost) {
        self.timedout.write().push(post);
    }

    fn timedout_posts(&self) -> Vec<TimedoutPost> {
        self.timedout.read().clone()
    }
}
