// tests/fetch_http.rs
//
// Live fetches against a local listener serving canned responses.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use reqwest::blocking::Client;

use pitch_scrape::core::net::{delivery_url, get_json};
use pitch_scrape::error::FetchError;
use pitch_scrape::file::TableWriter;
use pitch_scrape::scrape::{self, HttpSource, SlotGrid};

const DELIVERY: &str = include_str!("fixtures/delivery.json");

fn client() -> Client {
    Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap()
}

/// Answer one connection per response, in order. Yields the request lines seen.
fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().unwrap();
            let mut req = Vec::new();
            let mut buf = [0u8; 512];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                req.extend_from_slice(&buf[..n]);
            }
            let line = String::from_utf8_lossy(&req).lines().next().unwrap_or_default().to_string();
            seen.push(line);

            let reason = match status {
                200 => "OK",
                404 => "Not Found",
                _ => "Internal Server Error",
            };
            let resp = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(resp.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        seen
    });
    (base, handle)
}

fn fetch_one(status: u16, body: &'static str) -> Result<Option<serde_json::Value>, FetchError> {
    let (base, server) = serve(vec![(status, body)]);
    let res = get_json(&client(), &delivery_url(&base, 1, 1, 1, "42"));
    let seen = server.join().unwrap();
    assert_eq!(seen, vec!["GET /widget/welcome/get_data?path=Delivery_1_1_1_42.json HTTP/1.1"]);
    res
}

#[test]
fn not_found_is_no_data() {
    assert!(fetch_one(404, "missing").unwrap().is_none());
}

#[test]
fn blank_ok_body_is_no_data() {
    assert!(fetch_one(200, "").unwrap().is_none());
}

#[test]
fn other_status_is_an_error() {
    match fetch_one(500, "oops") {
        Err(FetchError::Status { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("Delivery_1_1_1_42.json"), "{url}");
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[test]
fn non_json_body_is_a_decode_error() {
    assert!(matches!(fetch_one(200, "<html>busy</html>"), Err(FetchError::Decode { .. })));
}

#[test]
fn document_is_parsed() {
    let doc = fetch_one(200, DELIVERY).unwrap().unwrap();
    assert!(doc["match"]["delivery"].is_object());
}

#[test]
fn refused_connection_is_a_transport_error() {
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    // Listener dropped: nothing accepts on `addr` any more.
    let url = delivery_url(&format!("http://{addr}"), 1, 1, 1, "42");
    assert!(matches!(get_json(&client(), &url), Err(FetchError::Transport { .. })));
}

#[test]
fn http_source_drives_a_scrape() {
    let (base, server) = serve(vec![(200, DELIVERY), (404, ""), (503, "")]);
    let mut source = HttpSource::with_client(client(), &base, "42");

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("match_42.csv");
    let grid = SlotGrid::new(1..=1, 2..=2, 1..=3);

    let summary = scrape::run(&grid, &mut source, TableWriter::new(&out), None).unwrap();
    assert_eq!(summary.visited, 3);
    assert_eq!(summary.written, 1);
    assert_eq!(summary.empty, 1);
    assert_eq!(summary.skipped, 1);
    assert!(summary.is_clean());

    let seen = server.join().unwrap();
    let docs: Vec<_> = seen
        .iter()
        .filter_map(|l| l.split("path=").nth(1)?.split(' ').next())
        .collect();
    assert_eq!(docs, vec!["Delivery_1_2_1_42.json", "Delivery_1_2_2_42.json", "Delivery_1_2_3_42.json"]);

    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 2);
}
