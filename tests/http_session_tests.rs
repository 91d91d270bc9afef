use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use battleship_client::{Coord, HttpSession, Orientation, SessionApi, SessionError, ShotEffect};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn content_length(headers: &[u8]) -> usize {
    let text = String::from_utf8_lossy(headers);
    text.lines()
        .find_map(|l| {
            let (name, value) = l.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse().ok())?
        })
        .unwrap_or(0)
}

/// Serve exactly one HTTP exchange with a canned response, recording the raw
/// request for assertions.
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (SocketAddr, Arc<Mutex<Vec<u8>>>, tokio::task::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if let Some(end) = find_subslice(&request, b"\r\n\r\n") {
                if request.len() >= end + 4 + content_length(&request[..end]) {
                    break;
                }
            }
        }
        *seen_clone.lock().unwrap() = request;
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });
    (addr, seen, handle)
}

fn request_text(seen: &Arc<Mutex<Vec<u8>>>) -> String {
    String::from_utf8_lossy(&seen.lock().unwrap()).to_string()
}

#[tokio::test]
async fn test_fetch_state_parses_server_payload() {
    let (addr, seen, handle) = serve_once(
        "200 OK",
        r#"{"over": false, "winner": null, "placing": false,
            "human": {"hits": [[0, 0]], "misses": [], "ships": []},
            "ai": {"hits": [], "misses": [[9, 9]], "ships": []},
            "human_sunk": [], "ai_sunk": []}"#,
    )
    .await;

    let mut session = HttpSession::new(format!("http://{addr}")).unwrap();
    let state = session.fetch_state().await.unwrap();
    handle.await.unwrap();

    assert_eq!(state.human.hits, vec![Coord(0, 0)]);
    assert_eq!(state.ai.misses, vec![Coord(9, 9)]);
    assert!(request_text(&seen).starts_with("GET /api/state"));
}

#[tokio::test]
async fn test_fire_sends_label_and_parses_outcome() {
    let (addr, seen, handle) = serve_once(
        "200 OK",
        r#"{"human": {"label": "B7", "result": "hit", "sunk": null}, "ai": null}"#,
    )
    .await;

    let mut session = HttpSession::new(format!("http://{addr}/")).unwrap();
    let outcome = session.fire(Coord(1, 6)).await.unwrap();
    handle.await.unwrap();

    assert_eq!(outcome.human.result, ShotEffect::Hit);
    assert!(outcome.ai.is_none());
    let request = request_text(&seen);
    assert!(request.starts_with("POST /api/fire"), "{request}");
    assert!(request.contains(r#"{"cell":"B7"}"#), "{request}");
}

#[tokio::test]
async fn test_place_sends_start_and_orientation() {
    let (addr, seen, handle) = serve_once("200 OK", r#"{"ok": true, "done": true}"#).await;

    let mut session = HttpSession::new(format!("http://{addr}")).unwrap();
    let outcome = session
        .place_ship(Coord(0, 4), Orientation::Vertical)
        .await
        .unwrap();
    handle.await.unwrap();

    assert!(outcome.done);
    let request = request_text(&seen);
    assert!(request.starts_with("POST /api/place"), "{request}");
    assert!(request.contains(r#""start":"A5""#), "{request}");
    assert!(request.contains(r#""orient":"V""#), "{request}");
}

#[tokio::test]
async fn test_new_game_posts_placement_mode() {
    let (addr, seen, handle) = serve_once("200 OK", r#"{"ok": true}"#).await;

    let mut session = HttpSession::new(format!("http://{addr}")).unwrap();
    session.start_new_game(false).await.unwrap();
    handle.await.unwrap();

    let request = request_text(&seen);
    assert!(request.starts_with("POST /api/new-game"), "{request}");
    assert!(request.contains(r#"{"auto_place":false}"#), "{request}");
}

#[tokio::test]
async fn test_rejection_surfaces_server_reason_verbatim() {
    let (addr, _seen, handle) = serve_once(
        "400 BAD REQUEST",
        r#"{"error": "finish ship placement before firing"}"#,
    )
    .await;

    let mut session = HttpSession::new(format!("http://{addr}")).unwrap();
    let err = session.fire(Coord(0, 0)).await.unwrap_err();
    handle.await.unwrap();

    match err {
        SessionError::Rejected(reason) => {
            assert_eq!(reason, "finish ship placement before firing")
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rejection_without_error_body_falls_back_to_status() {
    let (addr, _seen, handle) = serve_once("500 INTERNAL SERVER ERROR", "oops").await;

    let mut session = HttpSession::new(format!("http://{addr}")).unwrap();
    let err = session.fetch_state().await.unwrap_err();
    handle.await.unwrap();

    match err {
        SessionError::Rejected(reason) => assert!(reason.contains("500"), "{reason}"),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_peer_is_a_transport_error() {
    let mut session = HttpSession::new("http://127.0.0.1:1").unwrap();
    let err = session.fetch_state().await.unwrap_err();
    assert!(matches!(err, SessionError::Transport(_)), "{err:?}");
}
