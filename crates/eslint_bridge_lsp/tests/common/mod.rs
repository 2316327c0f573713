#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use eslint_bridge_lsp::Backend;
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt, DuplexStream};
use tokio::sync::mpsc::UnboundedReceiver;
use tower_lsp::LspService;

/// Stand-in ESLint: appends a semicolon in fix mode, reports `semi` otherwise.
pub const SEMI_ESLINT: &str = r#"#!/bin/sh
body=$(cat)
for a in "$@"; do
  if [ "$a" = "--fix-dry-run" ]; then
    case "$body" in
      *\;) out="$body" ;;
      *) out="$body;" ;;
    esac
    printf '[{"messages":[],"output":"%s"}]' "$out"
    exit 0
  fi
done
echo '[{"messages":[{"ruleId":"semi","severity":2,"message":"Missing semicolon.","line":1,"column":12,"endLine":1,"endColumn":13}]}]'
"#;

/// Stand-in ESLint: logs each call to `<script>.calls` and reports nothing.
pub const COUNTING_ESLINT: &str = r#"#!/bin/sh
cat >/dev/null
echo call >> "$0.calls"
echo '[{"messages":[]}]'
"#;

/// Stand-in ESLint: the first call stalls and reports `slow`, later calls
/// answer at once with `fast`.
pub const STALLING_ESLINT: &str = r#"#!/bin/sh
cat >/dev/null
if [ ! -e "$0.first" ]; then
  : > "$0.first"
  sleep 2
  echo '[{"messages":[{"severity":2,"message":"slow","line":1,"column":1}]}]'
else
  echo '[{"messages":[{"severity":2,"message":"fast","line":1,"column":1}]}]'
fi
"#;

/// Creates `root/repo/eslint.config.js`, `root/repo/src/a.js` and an
/// executable ESLint script. Returns the script path and the source file path.
#[cfg(unix)]
pub fn fake_repo(root: &Path, script: &str) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let repo = root.join("repo");
    fs::create_dir_all(repo.join("src")).unwrap();
    fs::write(repo.join("eslint.config.js"), "export default [];\n").unwrap();
    let source = repo.join("src/a.js");
    fs::write(&source, "const x = 1").unwrap();

    let eslint = root.join("eslint");
    fs::write(&eslint, script).unwrap();
    fs::set_permissions(&eslint, fs::Permissions::from_mode(0o755)).unwrap();

    (eslint, source)
}

pub async fn send_msg<W: AsyncWriteExt + Unpin>(writer: &mut W, msg: &str) {
    let content = format!("Content-Length: {}\r\n\r\n{}", msg.len(), msg);
    writer.write_all(content.as_bytes()).await.unwrap();
    writer.flush().await.unwrap();
}

pub async fn recv_msg<R: AsyncReadExt + Unpin>(reader: &mut R) -> Option<String> {
    let mut buffer = Vec::new();
    let mut content_length = 0;

    loop {
        let byte = reader.read_u8().await.ok()?;
        buffer.push(byte);
        if buffer.ends_with(b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buffer);
            for line in headers.lines() {
                if line.to_lowercase().starts_with("content-length:") {
                    let parts: Vec<&str> = line.split(':').collect();
                    if parts.len() == 2 {
                        content_length = parts[1].trim().parse().unwrap_or_else(|e| {
                            panic!("Failed to parse Content-Length: {e}, header: {line}")
                        });
                    }
                }
            }
            break;
        }
    }

    if content_length == 0 {
        return None;
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).await.ok()?;

    Some(String::from_utf8(body).unwrap())
}

/// A server driven over an in-memory JSON-RPC stream.
pub struct Session {
    writer: DuplexStream,
    rx: UnboundedReceiver<Value>,
}

impl Session {
    /// Starts a server and completes the `initialize` handshake.
    pub async fn start(eslint: &Path) -> Self {
        let (client_read, server_write) = tokio::io::duplex(4096);
        let (server_read, client_write) = tokio::io::duplex(4096);
        let (service, socket) = LspService::new(Backend::new);

        tokio::spawn(async move {
            tower_lsp::Server::new(server_read, server_write, socket)
                .serve(service)
                .await;
        });

        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        tokio::spawn(async move {
            let mut reader = tokio::io::BufReader::new(client_read);
            while let Some(msg) = recv_msg(&mut reader).await {
                let value: Value = serde_json::from_str(&msg).unwrap();
                if tx.send(value).is_err() {
                    break;
                }
            }
        });

        let mut session = Self {
            writer: client_write,
            rx,
        };

        let init = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "initialize",
            "params": {
                "capabilities": {},
                "initializationOptions": {
                    "eslintPath": eslint,
                    "shellPath": "/bin/sh"
                }
            }
        });
        send_msg(&mut session.writer, &init.to_string()).await;
        let _resp = session.rx.recv().await.unwrap();
        session.notify("initialized", json!({})).await;
        session
    }

    /// Sends a notification.
    pub async fn notify(&mut self, method: &str, params: Value) {
        let msg = json!({ "jsonrpc": "2.0", "method": method, "params": params });
        send_msg(&mut self.writer, &msg.to_string()).await;
    }

    /// Sends a full-text `didChange`.
    pub async fn change(&mut self, uri: &str, version: i32, text: &str) {
        self.notify(
            "textDocument/didChange",
            json!({
                "textDocument": { "uri": uri, "version": version },
                "contentChanges": [{ "text": text }]
            }),
        )
        .await;
    }

    /// Waits for the next `publishDiagnostics` and returns its params.
    pub async fn next_publish(&mut self, within: Duration) -> Option<Value> {
        tokio::time::timeout(within, async {
            while let Some(value) = self.rx.recv().await {
                if value["method"] == "textDocument/publishDiagnostics" {
                    return Some(value["params"].clone());
                }
            }
            None
        })
        .await
        .ok()
        .flatten()
    }

    /// Collects every `publishDiagnostics` sent within `window`.
    pub async fn publishes_within(&mut self, window: Duration) -> Vec<Value> {
        let deadline = tokio::time::Instant::now() + window;
        let mut published = Vec::new();
        loop {
            let left = deadline.saturating_duration_since(tokio::time::Instant::now());
            match self.next_publish(left).await {
                Some(params) => published.push(params),
                None => return published,
            }
        }
    }
}
