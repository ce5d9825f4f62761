use postfeed::{filter_by_title, without_post, Post};
use rstest::{fixture, rstest};

#[fixture]
fn posts() -> Vec<Post> {
    vec![
        Post::new(1, "Mock Title 1", "Mock Body 1"),
        Post::new(2, "Mock Title 2", "Mock Body 2"),
        Post::new(3, "mock title 3", "Mock Body 3"),
        Post::new(4, "Another Title 2", "Body"),
    ]
}

fn ids(posts: &[&Post]) -> Vec<u64> {
    posts.iter().map(|p| p.id).collect()
}

#[rstest]
#[case("", vec![1, 2, 3, 4])]
#[case("Title 2", vec![2, 4])]
#[case("Mock", vec![1, 2])]
#[case("mock", vec![3])]
#[case("Body", vec![])]
#[case("Title 22", vec![])]
fn filter_matches_title_substrings(
    posts: Vec<Post>,
    #[case] term: &str,
    #[case] expected: Vec<u64>,
) {
    assert_eq!(ids(&filter_by_title(&posts, term)), expected);
}

#[rstest]
fn filter_result_is_exactly_the_matching_posts(posts: Vec<Post>) {
    for term in ["", "T", "Title", "itle 1", "3", "zzz"] {
        let hits = filter_by_title(&posts, term);
        for post in &posts {
            let included = hits.iter().any(|h| h.id == post.id);
            assert_eq!(
                included,
                post.title.contains(term),
                "term {term:?}, post {}",
                post.id
            );
        }
    }
}

#[rstest]
#[case(1, vec![2, 3, 4])]
#[case(3, vec![1, 2, 4])]
#[case(4, vec![1, 2, 3])]
#[case(99, vec![1, 2, 3, 4])]
fn removal_preserves_order(posts: Vec<Post>, #[case] id: u64, #[case] expected: Vec<u64>) {
    let rest = without_post(&posts, id);
    assert_eq!(rest.iter().map(|p| p.id).collect::<Vec<_>>(), expected);
}
