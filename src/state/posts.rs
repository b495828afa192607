/// Post data model and grouping
///
/// A `Post` is immutable once fetched. The grouping by author is derived
/// fresh from the current post list on every read; there is no cached
/// grouping to invalidate.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A single post as delivered by the remote source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique post ID
    pub id: i64,
    /// Author identifier, used as the grouping key
    pub user_id: i64,
    /// Post title, shown in the list and the detail pane
    pub title: String,
    /// Full body text
    pub body: String,
}

/// Partition posts by author identifier.
///
/// The returned map iterates its keys in ascending numeric order, and each
/// group keeps the posts in the order they arrived. Every post lands in
/// exactly one group.
pub fn grouped_by_author(posts: &[Post]) -> BTreeMap<i64, Vec<&Post>> {
    let mut groups: BTreeMap<i64, Vec<&Post>> = BTreeMap::new();
    for post in posts {
        groups.entry(post.user_id).or_default().push(post);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, user_id: i64, title: &str) -> Post {
        Post {
            id,
            user_id,
            title: title.to_string(),
            body: format!("body of post {}", id),
        }
    }

    #[test]
    fn grouping_is_a_partition() {
        let posts = vec![
            post(1, 3, "a"),
            post(2, 1, "b"),
            post(3, 3, "c"),
            post(4, 2, "d"),
            post(5, 1, "e"),
        ];

        let groups = grouped_by_author(&posts);

        // Every post appears exactly once across all groups
        let mut regrouped: Vec<&Post> = groups.values().flatten().copied().collect();
        regrouped.sort_by_key(|p| p.id);
        let original: Vec<&Post> = posts.iter().collect();
        let mut sorted_original = original.clone();
        sorted_original.sort_by_key(|p| p.id);
        assert_eq!(regrouped, sorted_original);
    }

    #[test]
    fn group_keys_ascend() {
        let posts = vec![post(1, 9, "a"), post(2, 2, "b"), post(3, 5, "c")];

        let keys: Vec<i64> = grouped_by_author(&posts).keys().copied().collect();

        assert_eq!(keys, vec![2, 5, 9]);
    }

    #[test]
    fn groups_keep_arrival_order() {
        let posts = vec![
            post(10, 1, "first"),
            post(7, 1, "second"),
            post(42, 1, "third"),
        ];

        let groups = grouped_by_author(&posts);
        let titles: Vec<&str> = groups[&1].iter().map(|p| p.title.as_str()).collect();

        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_list_yields_no_groups() {
        assert!(grouped_by_author(&[]).is_empty());
    }

    #[test]
    fn deserializes_remote_shape() {
        // Shape of the JSONPlaceholder /posts payload
        let json = r#"{
            "userId": 1,
            "id": 7,
            "title": "magnam facilis autem",
            "body": "dolore placeat quibusdam ea quo vitae"
        }"#;

        let parsed: Post = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.user_id, 1);
        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.title, "magnam facilis autem");
    }
}
