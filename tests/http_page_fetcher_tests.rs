#![cfg(feature = "fetch")]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use top_words::{get_most_frequent_words_from_url, Error, HttpPageFetcher, PageFetcher};

/// Answers a single HTTP request with `status_line` and `body`, then closes.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<()>) {
    serve_after(Duration::ZERO, status_line, body)
}

/// Like `serve_once`, but waits `delay` after reading the request before answering.
fn serve_after(
    delay: Duration,
    status_line: &'static str,
    body: &'static str,
) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind fixture server");
    let addr = listener.local_addr().expect("Failed to read local address");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Failed to accept connection");

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).expect("Failed to read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        thread::sleep(delay);

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        // The client may already have given up.
        let _ = stream.write_all(response.as_bytes());
    });

    (format!("http://{}/page", addr), handle)
}

#[cfg(test)]
mod http_page_fetcher_tests {
    use super::*;

    #[test]
    fn test_fetch_ok_returns_body() {
        let (url, handle) = serve_once("200 OK", "<p>Success</p>");
        let fetcher = HttpPageFetcher::new().expect("Failed to build fetcher");

        let page = fetcher.fetch(&url).expect("Request failed");
        handle.join().expect("Fixture server panicked");

        assert_eq!(page.as_deref(), Some("<p>Success</p>"));
    }

    #[test]
    fn test_fetch_not_found_returns_none() {
        let (url, handle) = serve_once("404 Not Found", "missing");
        let fetcher = HttpPageFetcher::new().expect("Failed to build fetcher");

        let page = fetcher.fetch(&url).expect("Request failed");
        handle.join().expect("Fixture server panicked");

        assert_eq!(page, None);
    }

    #[test]
    fn test_fetch_non_ok_success_status_returns_none() {
        let (url, handle) = serve_once("203 Non-Authoritative Information", "<p>copy</p>");
        let fetcher = HttpPageFetcher::with_timeout(Duration::from_secs(5))
            .expect("Failed to build fetcher");

        let page = fetcher.fetch(&url).expect("Request failed");
        handle.join().expect("Fixture server panicked");

        assert_eq!(page, None);
    }

    #[test]
    fn test_pipeline_fails_on_server_error() {
        let (url, handle) = serve_once("500 Internal Server Error", "boom");
        let fetcher = HttpPageFetcher::new().expect("Failed to build fetcher");

        let result = get_most_frequent_words_from_url(&fetcher, &url);
        handle.join().expect("Fixture server panicked");

        assert!(matches!(result, Err(Error::FetchError(_))));
    }

    #[test]
    fn test_pipeline_over_http() {
        let (url, handle) = serve_once("200 OK", "<h1>Hello</h1> <p>hello world</p>");
        let fetcher = HttpPageFetcher::new().expect("Failed to build fetcher");

        let results = get_most_frequent_words_from_url(&fetcher, &url).expect("Pipeline failed");
        handle.join().expect("Fixture server panicked");

        assert_eq!(
            results.iter().map(|e| e.as_pair()).collect::<Vec<_>>(),
            vec![("hello", 2), ("world", 1)]
        );
    }

    #[test]
    fn test_connection_refused_is_request_error() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to read local address");
        drop(listener);

        let fetcher = HttpPageFetcher::new().expect("Failed to build fetcher");
        let result = fetcher.fetch(&format!("http://{}/", addr));

        assert!(matches!(result, Err(Error::RequestError(_))));
    }

    #[test]
    fn test_default_fetcher_has_no_timeout() {
        let fetcher = HttpPageFetcher::new().expect("Failed to build fetcher");
        assert_eq!(fetcher.timeout(), None);

        let fetcher = HttpPageFetcher::with_timeout(Duration::from_secs(3))
            .expect("Failed to build fetcher");
        assert_eq!(fetcher.timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_default_fetcher_waits_for_slow_page() {
        let (url, handle) = serve_after(Duration::from_millis(1_500), "200 OK", "<p>slow</p>");
        let fetcher = HttpPageFetcher::new().expect("Failed to build fetcher");

        let page = fetcher.fetch(&url).expect("Request failed");
        handle.join().expect("Fixture server panicked");

        assert_eq!(page.as_deref(), Some("<p>slow</p>"));
    }

    #[test]
    fn test_timeout_aborts_slow_page() {
        let (url, handle) = serve_after(Duration::from_secs(2), "200 OK", "<p>late</p>");
        let fetcher = HttpPageFetcher::with_timeout(Duration::from_millis(200))
            .expect("Failed to build fetcher");

        let result = fetcher.fetch(&url);
        handle.join().expect("Fixture server panicked");

        assert!(matches!(result, Err(Error::RequestError(_))));
    }
}
