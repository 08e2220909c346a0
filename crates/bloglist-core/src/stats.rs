//! Aggregate statistics over a collection of posts.
//!
//! Everything here is a pure function of its input. Grouping is by the
//! free-text byline, not by owner. Ties go to whichever candidate comes
//! first in iteration order.

use serde::{Deserialize, Serialize};

use crate::domain::Post;

/// The most liked post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritePost {
    pub title: String,
    pub author: String,
    pub likes: u64,
}

/// The byline with the most posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPostCount {
    pub author: String,
    pub posts: usize,
}

/// The byline with the most likes across its posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorLikes {
    pub author: String,
    pub likes: u64,
}

/// All statistics for one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostStats {
    pub total_likes: u64,
    pub favorite_post: Option<FavoritePost>,
    pub most_posts: Option<AuthorPostCount>,
    pub most_likes: Option<AuthorLikes>,
}

/// Sum of all likes, saturating at `u64::MAX`.
pub fn total_likes(posts: &[Post]) -> u64 {
    posts.iter().fold(0, |total, p| total.saturating_add(p.likes))
}

pub fn favorite_post(posts: &[Post]) -> Option<FavoritePost> {
    let mut best: Option<&Post> = None;
    for post in posts {
        if best.is_none_or(|b| post.likes > b.likes) {
            best = Some(post);
        }
    }

    best.map(|p| FavoritePost {
        title: p.title.clone(),
        author: p.author.clone(),
        likes: p.likes,
    })
}

pub fn author_with_most_posts(posts: &[Post]) -> Option<AuthorPostCount> {
    max_group(group_by_byline(posts, |_| 1)).map(|(author, count)| AuthorPostCount {
        author,
        posts: count as usize,
    })
}

pub fn author_with_most_likes(posts: &[Post]) -> Option<AuthorLikes> {
    max_group(group_by_byline(posts, |p| p.likes))
        .map(|(author, likes)| AuthorLikes { author, likes })
}

pub fn summarize(posts: &[Post]) -> PostStats {
    PostStats {
        total_likes: total_likes(posts),
        favorite_post: favorite_post(posts),
        most_posts: author_with_most_posts(posts),
        most_likes: author_with_most_likes(posts),
    }
}

/// Sum `weight` per byline, keeping groups in first-appearance order.
fn group_by_byline(posts: &[Post], weight: impl Fn(&Post) -> u64) -> Vec<(String, u64)> {
    let mut groups: Vec<(String, u64)> = Vec::new();
    for post in posts {
        match groups.iter_mut().find(|(author, _)| *author == post.author) {
            Some((_, total)) => *total = total.saturating_add(weight(post)),
            None => groups.push((post.author.clone(), weight(post))),
        }
    }
    groups
}

fn max_group(groups: Vec<(String, u64)>) -> Option<(String, u64)> {
    groups
        .into_iter()
        .fold(None, |best, group| match best {
            Some(b) if b.1 >= group.1 => Some(b),
            _ => Some(group),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn post(title: &str, author: &str, likes: u64) -> Post {
        Post {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: author.to_string(),
            url: format!("https://example.com/{title}"),
            likes,
            owner_id: Uuid::nil(),
        }
    }

    fn blogs() -> Vec<Post> {
        vec![
            post("React patterns", "Michael Chan", 7),
            post("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
            post("Canonical string reduction", "Edsger W. Dijkstra", 12),
            post("First class tests", "Robert C. Martin", 10),
            post("TDD harms architecture", "Robert C. Martin", 0),
            post("Type wars", "Robert C. Martin", 2),
        ]
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(
            summarize(&[]),
            PostStats {
                total_likes: 0,
                favorite_post: None,
                most_posts: None,
                most_likes: None,
            }
        );
    }

    #[test]
    fn test_single_post() {
        let posts = vec![post("React patterns", "Michael Chan", 7)];

        assert_eq!(total_likes(&posts), 7);
        assert_eq!(favorite_post(&posts).unwrap().title, "React patterns");
        assert_eq!(
            author_with_most_posts(&posts),
            Some(AuthorPostCount {
                author: "Michael Chan".into(),
                posts: 1
            })
        );
    }

    #[test]
    fn test_total_likes() {
        assert_eq!(total_likes(&blogs()), 36);
    }

    #[test]
    fn test_favorite_post() {
        assert_eq!(
            favorite_post(&blogs()),
            Some(FavoritePost {
                title: "Canonical string reduction".into(),
                author: "Edsger W. Dijkstra".into(),
                likes: 12,
            })
        );
    }

    #[test]
    fn test_favorite_post_tie_takes_first() {
        let posts = vec![post("first", "a", 3), post("second", "b", 3)];
        assert_eq!(favorite_post(&posts).unwrap().title, "first");
    }

    #[test]
    fn test_author_with_most_posts() {
        assert_eq!(
            author_with_most_posts(&blogs()),
            Some(AuthorPostCount {
                author: "Robert C. Martin".into(),
                posts: 3
            })
        );
    }

    #[test]
    fn test_author_with_most_likes() {
        assert_eq!(
            author_with_most_likes(&blogs()),
            Some(AuthorLikes {
                author: "Edsger W. Dijkstra".into(),
                likes: 17
            })
        );
    }

    #[test]
    fn test_group_ties_take_first_group() {
        let posts = vec![
            post("one", "b", 1),
            post("two", "a", 1),
            post("three", "a", 1),
            post("four", "b", 1),
        ];

        assert_eq!(author_with_most_posts(&posts).unwrap().author, "b");
        assert_eq!(author_with_most_likes(&posts).unwrap().author, "b");
    }

    #[test]
    fn test_sums_saturate() {
        let posts = vec![
            post("huge", "Michael Chan", u64::MAX),
            post("small", "Michael Chan", 1),
            post("other", "Edsger W. Dijkstra", 5),
        ];

        let stats = summarize(&posts);

        assert_eq!(stats.total_likes, u64::MAX);
        assert_eq!(
            stats.most_likes,
            Some(AuthorLikes {
                author: "Michael Chan".into(),
                likes: u64::MAX
            })
        );
        assert_eq!(stats.favorite_post.unwrap().title, "huge");
    }
}
