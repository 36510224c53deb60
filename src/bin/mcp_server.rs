use anyhow::Result;
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use text_extractor::mcp_server::McpServer;

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let server = McpServer::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Value>(&line) {
            Ok(request) => {
                let id = request["id"].clone();

                match server.handle_request(request) {
                    Ok(mut resp) => {
                        if !id.is_null() {
                            if let Some(obj) = resp.as_object_mut() {
                                obj.insert("id".to_string(), id);
                            }
                        }
                        resp
                    }
                    Err(err) => json!({
                        "id": id,
                        "error": {
                            "code": -1,
                            "message": err
                        }
                    }),
                }
            }
            Err(_) => json!({
                "error": {
                    "code": -32700,
                    "message": "Parse error"
                }
            }),
        };

        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;
    }

    Ok(())
}
