// src/domain/journal.rs
pub const ALL_POSTS: &str = "All";
pub const CATEGORIES: [&str; 7] = [
    ALL_POSTS,
    "Market Analysis",
    "Property Tours",
    "Guides",
    "Investment",
    "Technology",
    "Trends",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub image: &'static str,
    pub category: &'static str,
    /// Only the featured post carries a byline.
    pub author: Option<Byline>,
    pub date: &'static str,
    pub read_time: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Byline {
    pub name: &'static str,
    pub image: &'static str,
}

/// Resolve a `category` query value. Unknown names fall back to every post.
pub fn selected_category(raw: Option<&str>) -> &'static str {
    raw.map(str::trim)
        .and_then(|c| CATEGORIES.iter().find(|known| **known == c))
        .copied()
        .unwrap_or(ALL_POSTS)
}

pub fn filter_posts<'a>(posts: &'a [Post], category: &str) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| category == ALL_POSTS || p.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::journal::POSTS;

    #[test]
    fn category_resolution() {
        assert_eq!(selected_category(None), ALL_POSTS);
        assert_eq!(selected_category(Some("Guides")), "Guides");
        assert_eq!(selected_category(Some("guides")), ALL_POSTS);
        assert_eq!(selected_category(Some("Gossip")), ALL_POSTS);
    }

    #[test]
    fn filter_by_category() {
        assert_eq!(filter_posts(POSTS, ALL_POSTS).len(), POSTS.len());
        let tours: Vec<_> = filter_posts(POSTS, "Property Tours")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(tours, ["3", "7"]);
        assert!(filter_posts(POSTS, "Trends").is_empty());
    }
}
