//! `HttpPostSource` against a mock HTTP server.

use mockito::{Matcher, Server};
use postfeed::{HttpPostSource, Post, PostFeedError, PostSource};
use std::net::TcpListener;
use std::time::Duration;

const PAGE_ONE: &str = r#"[
    {"userId":1,"id":1,"title":"Mock Title 1","body":"Mock Body 1"},
    {"userId":1,"id":2,"title":"Mock Title 2","body":"Mock Body 2"}
]"#;

fn source(server: &Server) -> HttpPostSource {
    HttpPostSource::new(&format!("{}/posts", server.url()), Duration::from_secs(5)).unwrap()
}

fn page(n: u32) -> Matcher {
    Matcher::UrlEncoded("_page".into(), n.to_string())
}

#[test]
fn fetches_and_decodes_a_page() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/posts")
        .match_query(page(1))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PAGE_ONE)
        .expect(1)
        .create();

    let posts = source(&server).fetch_page(1).unwrap();
    assert_eq!(
        posts,
        vec![
            Post::new(1, "Mock Title 1", "Mock Body 1"),
            Post::new(2, "Mock Title 2", "Mock Body 2"),
        ]
    );
    mock.assert();
}

#[test]
fn existing_query_is_kept_alongside_the_page() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/posts")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("userId".into(), "1".into()),
            page(2),
        ]))
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create();

    let endpoint = format!("{}/posts?userId=1", server.url());
    let posts = HttpPostSource::new(&endpoint, Duration::from_secs(5))
        .unwrap()
        .fetch_page(2)
        .unwrap();
    assert!(posts.is_empty());
    mock.assert();
}

#[test]
fn non_success_status_is_an_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/posts")
        .match_query(page(1))
        .with_status(500)
        .with_body("oops")
        .create();

    let err = source(&server).fetch_page(1).unwrap_err();
    assert!(matches!(err, PostFeedError::Status { page: 1, status: 500 }));
    assert!(err.is_fetch_failure());
}

#[test]
fn malformed_body_is_a_decode_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/posts")
        .match_query(page(3))
        .with_status(200)
        .with_body(r#"{"not":"a list"}"#)
        .create();

    let err = source(&server).fetch_page(3).unwrap_err();
    assert!(matches!(err, PostFeedError::Decode(_)));
}

#[test]
fn unreachable_host_is_a_request_error() {
    // Bind then drop to get a port with nothing listening
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let err = HttpPostSource::new(
        &format!("http://127.0.0.1:{}/posts", port),
        Duration::from_secs(5),
    )
    .unwrap()
    .fetch_page(1)
    .unwrap_err();
    assert!(matches!(err, PostFeedError::Request(_)));
}
