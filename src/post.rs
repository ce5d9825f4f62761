//! Post records and the collection operations the views are built on.

use serde::{Deserialize, Serialize};

/// A server-provided post. Unknown JSON fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Case-sensitive substring match against the title. An empty term matches everything.
    #[inline]
    pub fn matches_title(&self, term: &str) -> bool {
        term.is_empty() || self.title.contains(term)
    }

    /// Body split on newlines; an empty body still yields one (empty) line
    pub fn body_lines(&self) -> Vec<&str> {
        let lines: Vec<&str> = self.body.lines().collect();
        if lines.is_empty() {
            vec![""]
        } else {
            lines
        }
    }
}

/// Indices into `posts` whose titles match `term`, in collection order
pub fn matching_indices(posts: &[Post], term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..posts.len()).collect();
    }
    posts
        .iter()
        .enumerate()
        .filter(|(_, post)| post.matches_title(term))
        .map(|(idx, _)| idx)
        .collect()
}

/// Posts whose titles match `term`, in collection order
pub fn filter_by_title<'a>(posts: &'a [Post], term: &str) -> Vec<&'a Post> {
    posts.iter().filter(|post| post.matches_title(term)).collect()
}

/// A new collection without the post `id`; remaining order is preserved
pub fn without_post(posts: &[Post], id: u64) -> Vec<Post> {
    posts.iter().filter(|post| post.id != id).cloned().collect()
}

/// Append a fetched page. With `dedupe` set, posts whose id is already present are
/// skipped. Returns how many posts were added.
pub fn append_page(posts: &mut Vec<Post>, page: Vec<Post>, dedupe: bool) -> usize {
    let before = posts.len();
    if dedupe {
        for post in page {
            if !posts.iter().any(|existing| existing.id == post.id) {
                posts.push(post);
            }
        }
    } else {
        posts.extend(page);
    }
    posts.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Post> {
        vec![
            Post::new(1, "Test Title 1", "Test Body 1"),
            Post::new(2, "Test Title 2", "Test Body 2"),
            Post::new(3, "another title", "line one\nline two"),
        ]
    }

    #[test]
    fn empty_term_keeps_everything() {
        let posts = sample();
        assert_eq!(matching_indices(&posts, ""), vec![0, 1, 2]);
        assert_eq!(filter_by_title(&posts, "").len(), 3);
    }

    #[test]
    fn title_match_is_case_sensitive() {
        let posts = sample();
        let hits = filter_by_title(&posts, "Title");
        assert_eq!(hits.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(matching_indices(&posts, "title"), vec![2]);
    }

    #[test]
    fn body_is_not_searched() {
        let posts = sample();
        assert!(filter_by_title(&posts, "Body").is_empty());
    }

    #[test]
    fn removing_preserves_order() {
        let posts = sample();
        let rest = without_post(&posts, 2);
        assert_eq!(rest.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(without_post(&posts, 42), posts);
    }

    #[test]
    fn append_keeps_duplicates_unless_asked() {
        let mut posts = sample();
        let page = vec![Post::new(3, "dup", ""), Post::new(4, "new", "")];
        let added = append_page(&mut posts, page, false);
        assert_eq!(added, 2);
        assert_eq!(posts.len(), 5);

        let mut posts = sample();
        let page = vec![Post::new(3, "dup", ""), Post::new(4, "new", "")];
        let added = append_page(&mut posts, page, true);
        assert_eq!(added, 1);
        assert_eq!(posts.last().map(|p| p.id), Some(4));
    }

    #[test]
    fn body_lines_cover_the_whole_body() {
        assert_eq!(sample()[2].body_lines(), vec!["line one", "line two"]);
        assert_eq!(Post::new(9, "t", "").body_lines(), vec![""]);
    }

    #[test]
    fn decodes_wire_format_ignoring_extra_fields() {
        let json = r#"[{"userId":1,"id":7,"title":"hello","body":"world"}]"#;
        let posts: Vec<Post> = serde_json::from_str(json).unwrap();
        assert_eq!(posts, vec![Post::new(7, "hello", "world")]);
    }
}
