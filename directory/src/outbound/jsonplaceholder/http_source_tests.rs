//! Coverage for endpoint layout, error mapping, and decoding.

use rstest::rstest;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use super::*;

fn base(raw: &str) -> Url {
    Url::parse(raw).expect("test base URL should parse")
}

#[rstest]
#[case::users("users", None, "https://api.test/v1/users")]
#[case::single_user("users/3", None, "https://api.test/v1/users/3")]
#[case::posts("posts", Some(("userId", 3)), "https://api.test/v1/posts?userId=3")]
#[case::comments("comments", Some(("postId", 12)), "https://api.test/v1/comments?postId=12")]
fn endpoints_resolve_below_the_base_path(
    #[case] path: &str,
    #[case] query: Option<(&str, u64)>,
    #[case] expected: &str,
) {
    let base_url = with_trailing_slash(base("https://api.test/v1"));

    let url = endpoint(&base_url, path, query).expect("endpoint should build");

    assert_eq!(url.as_str(), expected);
}

#[test]
fn trailing_slash_is_not_doubled() {
    let url = with_trailing_slash(base("https://api.test/"));
    assert_eq!(url.as_str(), "https://api.test/");
}

#[rstest]
#[case::not_found(StatusCode::NOT_FOUND, Some(404))]
#[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, Some(500))]
#[case::request_timeout(StatusCode::REQUEST_TIMEOUT, None)]
#[case::gateway_timeout(StatusCode::GATEWAY_TIMEOUT, None)]
fn maps_http_statuses_to_expected_errors(
    #[case] status: StatusCode,
    #[case] expected_status: Option<u16>,
) {
    let error = map_status_error(status, b"{}");
    match expected_status {
        Some(code) => assert!(
            matches!(error, DirectorySourceError::Status { status, .. } if status == code),
            "non-timeout statuses should keep their code",
        ),
        None => assert!(
            matches!(error, DirectorySourceError::Timeout { .. }),
            "timeout statuses should map to Timeout",
        ),
    }
}

#[test]
fn empty_error_body_falls_back_to_the_reason_phrase() {
    let error = map_status_error(StatusCode::NOT_FOUND, b"");
    assert!(
        matches!(&error, DirectorySourceError::Status { message, .. } if message == "Not Found"),
        "empty bodies should use the canonical reason: {error}",
    );
}

#[test]
fn body_preview_compacts_and_truncates() {
    let long_body = format!("  first\n\tsecond {}", "x".repeat(200));

    let preview = body_preview(long_body.as_bytes());

    assert!(preview.starts_with("first second x"));
    assert!(preview.ends_with("..."));
    assert_eq!(preview.chars().count(), 163);
}

#[test]
fn decodes_users_and_ignores_fields_the_page_never_renders() {
    let body = r#"[
        {
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        },
        { "id": 2, "name": "Ervin Howell" }
    ]"#;

    let users: Vec<UserDto> = decode(body.as_bytes()).expect("users should decode");
    let users: Vec<User> = users.into_iter().map(User::from).collect();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].company_name(), "Romaguera-Crona");
    assert_eq!(
        users[0].catch_phrase(),
        "Multi-layered client-server neural-net"
    );
    assert_eq!(users[1].company, None);
}

#[test]
fn decodes_camel_case_post_and_comment_keys() {
    let posts: Vec<PostDto> = decode(br#"[{"userId": 1, "id": 2, "title": "t", "body": "b"}]"#)
        .expect("posts should decode");
    let comments: Vec<CommentDto> = decode(
        br#"[{"postId": 2, "id": 6, "name": "n", "email": "e@x.test", "body": "c"}]"#,
    )
    .expect("comments should decode");

    assert_eq!(Post::from(posts.into_iter().next().expect("one post")).user_id, 1);
    assert_eq!(
        Comment::from(comments.into_iter().next().expect("one comment")).email,
        "e@x.test"
    );
}

#[rstest]
#[case::object_instead_of_list(r#"{"id": 1}"#)]
#[case::not_json("<html>oops</html>")]
fn wrong_shaped_bodies_map_to_decode_errors(#[case] body: &str) {
    let error = decode::<Vec<PostDto>>(body.as_bytes()).expect_err("decode should fail");
    assert!(
        matches!(error, DirectorySourceError::Decode { .. }),
        "malformed payloads should map to Decode errors",
    );
}

/// Serve one canned HTTP response and report the request line it received.
async fn serve_once(
    status_line: &'static str,
    body: &'static str,
) -> (Url, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub should bind");
    let address = listener.local_addr().expect("stub should have an address");
    let (request_tx, request_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("stub should accept");
        let mut buffer = vec![0_u8; 8192];
        let mut read = 0;
        loop {
            let count = socket
                .read(&mut buffer[read..])
                .await
                .expect("stub should read");
            read += count;
            if count == 0 || buffer[..read].windows(4).any(|window| window == b"\r\n\r\n") {
                break;
            }
        }
        let request = String::from_utf8_lossy(&buffer[..read]);
        let request_line = request.lines().next().unwrap_or_default().to_owned();
        if request_tx.send(request_line).is_err() {
            return;
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("stub should write");
    });

    (base(&format!("http://{address}")), request_rx)
}

fn local_source(base_url: Url) -> DirectoryHttpSource {
    let client = Client::builder()
        .no_proxy()
        .build()
        .expect("test client should build");
    DirectoryHttpSource::with_client(client, base_url)
}

#[tokio::test]
async fn fetches_user_posts_with_the_user_id_query() {
    let (base_url, request) = serve_once(
        "200 OK",
        r#"[{"userId": 3, "id": 21, "title": "asperiores", "body": "repellat"}]"#,
    )
    .await;

    let posts = local_source(base_url)
        .list_user_posts(3)
        .await
        .expect("stubbed posts should load");

    assert_eq!(posts, vec![Post::new(21, 3, "asperiores", "repellat")]);
    assert_eq!(
        request.await.expect("stub should report its request"),
        "GET /posts?userId=3 HTTP/1.1"
    );
}

#[tokio::test]
async fn missing_user_surfaces_the_status_code() {
    let (base_url, _request) = serve_once("404 Not Found", "{}").await;

    let error = local_source(base_url)
        .find_user(11)
        .await
        .expect_err("404 should fail");

    assert!(
        matches!(error, DirectorySourceError::Status { status: 404, .. }),
        "unexpected error: {error}",
    );
}

#[tokio::test]
async fn unreachable_host_maps_to_transport() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("probe should bind");
    let address = listener.local_addr().expect("probe should have an address");
    drop(listener);

    let error = local_source(base(&format!("http://{address}")))
        .list_users()
        .await
        .expect_err("closed port should fail");

    assert!(
        matches!(error, DirectorySourceError::Transport { .. }),
        "unexpected error: {error}",
    );
}
