//! Community feed helpers

use crate::schema::CommunityPost;

/// Author label shown when a post has no creator
const DEFAULT_AUTHOR: &str = "User";

impl CommunityPost {
    /// Create a new post with a fresh id and no likes or replies
    pub fn new(content: impl Into<String>, is_anonymous: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            is_anonymous,
            likes: 0,
            replies: Vec::new(),
            created_by: None,
        }
    }

    /// Set the post's author
    pub fn by(mut self, author: impl Into<String>) -> Self {
        self.created_by = Some(author.into());
        self
    }

    /// Name shown next to the post
    pub fn author(&self) -> &str {
        if self.is_anonymous {
            "Anonymous"
        } else {
            self.created_by.as_deref().unwrap_or(DEFAULT_AUTHOR)
        }
    }
}

/// Mock feed shown before any posts are loaded
pub fn sample_posts() -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            id: "p1".to_string(),
            likes: 5,
            ..CommunityPost::new("Loving the new workouts!", false)
        },
        CommunityPost {
            id: "p2".to_string(),
            likes: 2,
            ..CommunityPost::new("How to improve posture?", false)
        },
    ]
}

/// Render a post as "author: content (N likes)"
pub fn render_post(post: &CommunityPost) -> String {
    format!("{}: {} ({} likes)", post.author(), post.content, post.likes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_posts() {
        let posts = sample_posts();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "p1");
        assert_eq!(posts[0].likes, 5);
        assert_eq!(posts[1].content, "How to improve posture?");
        assert!(posts.iter().all(|p| p.replies.is_empty()));
    }

    #[test]
    fn test_render_post() {
        let posts = sample_posts();
        assert_eq!(render_post(&posts[0]), "User: Loving the new workouts! (5 likes)");

        let named = CommunityPost::new("Hit a new PR", false).by("Sam");
        assert_eq!(render_post(&named), "Sam: Hit a new PR (0 likes)");
    }

    #[test]
    fn test_render_anonymous_hides_author() {
        let post = CommunityPost::new("Struggling with motivation", true).by("Sam");
        assert_eq!(render_post(&post), "Anonymous: Struggling with motivation (0 likes)");
    }

    #[test]
    fn test_new_posts_get_unique_ids() {
        let a = CommunityPost::new("a", false);
        let b = CommunityPost::new("b", false);
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }
}
