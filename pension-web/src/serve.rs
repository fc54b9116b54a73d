//! Static file server for the built pension web app
//!
//! Serves `dist/` on port 8080. The app routes with the history API, so any
//! request that does not name an existing file gets `index.html` and the
//! router in the browser picks the page.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

const ADDR: &str = "127.0.0.1:8080";
const DIST_DIR: &str = "dist";

fn main() {
    let listener = match TcpListener::bind(ADDR) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", ADDR, e);
            std::process::exit(1);
        }
    };

    println!("Pension web app running at http://{}", ADDR);
    println!("Serving from {}/ directory", DIST_DIR);
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, Path::new(DIST_DIR)),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream, root: &Path) {
    let request_line = match BufReader::new(&mut stream).lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let file_path = resolve_asset(root, target);

    let (status, body, content_type) = match fs::read(&file_path) {
        Ok(body) => ("200 OK", body, content_type(&file_path)),
        Err(e) => {
            eprintln!("Cannot read {}: {}", file_path.display(), e);
            (
                "404 NOT FOUND",
                b"<!DOCTYPE html><html><body><h1>Not found</h1><p>Run trunk build first.</p></body></html>"
                    .to_vec(),
                "text/html; charset=utf-8",
            )
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream
        .write_all(headers.as_bytes())
        .and_then(|_| stream.write_all(&body))
        .and_then(|_| stream.flush())
    {
        eprintln!("Failed to write response: {}", e);
    }
}

/// Map a request target to a file under `root`.
///
/// Existing files are served as-is. Everything else, including directories
/// and paths that try to leave `root`, falls back to `index.html`.
fn resolve_asset(root: &Path, target: &str) -> PathBuf {
    let index = root.join("index.html");
    let path = target.split(['?', '#']).next().unwrap_or_default();

    let mut candidate = root.to_path_buf();
    for component in Path::new(path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => candidate.push(part),
            Component::CurDir => {}
            _ => return index,
        }
    }

    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pension-serve-{}", std::process::id()));
        fs::create_dir_all(dir.join("assets")).unwrap();
        fs::write(dir.join("index.html"), "<html></html>").unwrap();
        fs::write(dir.join("pension_web_bg.wasm"), [0u8, 97, 115, 109]).unwrap();
        fs::write(dir.join("assets").join("main.css"), "body {}").unwrap();
        dir
    }

    #[test]
    fn test_existing_files_are_served() {
        let root = dist();
        assert_eq!(
            resolve_asset(&root, "/pension_web_bg.wasm"),
            root.join("pension_web_bg.wasm")
        );
        assert_eq!(
            resolve_asset(&root, "/assets/main.css?v=3"),
            root.join("assets").join("main.css")
        );
    }

    #[test]
    fn test_routes_fall_back_to_index() {
        let root = dist();
        let index = root.join("index.html");
        for target in ["/", "/about", "/mypension", "/contribute?x=1", "/register/", "/unknown"] {
            assert_eq!(resolve_asset(&root, target), index, "{target}");
        }
        assert_eq!(resolve_asset(&root, "/assets"), index);
    }

    #[test]
    fn test_path_traversal_is_refused() {
        let root = dist();
        assert_eq!(resolve_asset(&root, "/../Cargo.toml"), root.join("index.html"));
        assert_eq!(
            resolve_asset(&root, "/assets/../../secret"),
            root.join("index.html")
        );
    }

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("app_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("app.js")), "application/javascript");
        assert_eq!(content_type(Path::new("LICENSE")), "application/octet-stream");
    }
}
