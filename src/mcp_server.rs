use serde_json::{json, Map, Value};
use std::fs;
use tracing::debug;

use crate::{classify, extract, parse_kinds, DomainPolicy, ExtractOptions, ExtractionKind};

#[derive(Clone, Default)]
pub struct McpServer;

impl McpServer {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_request(&self, request: Value) -> Result<Value, String> {
        let method = request["method"].as_str().unwrap_or("");
        debug!(method, "mcp request");

        match method {
            "initialize" => self.handle_initialize(),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tool_call(&request["params"]),
            _ => Err(format!("Unknown method: {}", method))
        }
    }

    fn handle_initialize(&self) -> Result<Value, String> {
        Ok(json!({
            "result": {
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": "text-extractor",
                    "version": env!("CARGO_PKG_VERSION")
                }
            }
        }))
    }

    fn handle_tools_list(&self) -> Result<Value, String> {
        let extraction_args = json!({
            "kinds": {
                "type": "string",
                "description": "Kinds to extract, comma-separated: email,url,domain,mobile (default: all)"
            },
            "strict_domains": {
                "type": "boolean",
                "description": "Fail instead of skipping URLs without a usable host"
            }
        });

        let mut text_props = json!({
            "text": { "type": "string", "description": "Text content to extract from" }
        });
        let mut file_props = json!({
            "file_path": { "type": "string", "description": "Path to the file to extract from" }
        });
        for props in [&mut text_props, &mut file_props] {
            if let (Some(target), Some(extra)) = (props.as_object_mut(), extraction_args.as_object()) {
                target.extend(extra.clone());
            }
        }

        Ok(json!({
            "result": {
                "tools": [
                    {
                        "name": "extract_text",
                        "description": "Extract emails, URLs, domains and Singapore mobile numbers from text",
                        "inputSchema": {
                            "type": "object",
                            "properties": text_props,
                            "required": ["text"]
                        }
                    },
                    {
                        "name": "extract_file",
                        "description": "Extract emails, URLs, domains and Singapore mobile numbers from a file",
                        "inputSchema": {
                            "type": "object",
                            "properties": file_props,
                            "required": ["file_path"]
                        }
                    },
                    {
                        "name": "classify_value",
                        "description": "List the kinds a single value matches as a whole",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "value": { "type": "string", "description": "Value to classify" }
                            },
                            "required": ["value"]
                        }
                    }
                ]
            }
        }))
    }

    fn handle_tool_call(&self, params: &Value) -> Result<Value, String> {
        let tool_name = params["name"].as_str()
            .ok_or("Missing tool name")?;

        let arguments = &params["arguments"];

        match tool_name {
            "extract_text" => {
                let text = arguments["text"].as_str()
                    .ok_or("text is required")?;
                self.run_extraction(text, arguments, "text_input")
            }
            "extract_file" => {
                let file_path = arguments["file_path"].as_str()
                    .ok_or("file_path is required")?;
                let bytes = fs::read(file_path)
                    .map_err(|e| format!("Error reading file {}: {}", file_path, e))?;
                let text = String::from_utf8_lossy(&bytes);
                self.run_extraction(&text, arguments, file_path)
            }
            "classify_value" => self.classify_value(arguments),
            _ => Err(format!("Unknown tool: {}", tool_name))
        }
    }

    fn run_extraction(&self, text: &str, args: &Value, source: &str) -> Result<Value, String> {
        let kinds = parse_kinds(args["kinds"].as_str().unwrap_or(""))
            .map_err(|e| e.to_string())?;
        let options = ExtractOptions {
            domain_policy: if args["strict_domains"].as_bool().unwrap_or(false) {
                DomainPolicy::Strict
            } else {
                DomainPolicy::Skip
            },
        };

        let mut data = Map::new();
        let mut summary = format!("Extraction complete: {}\n\n", source);
        for kind in kinds {
            let values = extract(kind, text, &options).map_err(|e| e.to_string())?;
            summary.push_str(&format!("- {}: {}\n", kind.plural(), values.len()));
            data.insert(kind.label().to_string(), json!(values));
        }

        Ok(json!({
            "result": {
                "content": [{
                    "type": "text",
                    "text": summary
                }],
                "data": data
            }
        }))
    }

    fn classify_value(&self, args: &Value) -> Result<Value, String> {
        let value = args["value"].as_str()
            .ok_or("value is required")?;

        let kinds: Vec<&str> = classify(value).into_iter().map(ExtractionKind::label).collect();
        let text = if kinds.is_empty() {
            format!("{:?} matches no known kind", value)
        } else {
            format!("{:?} => {}", value, kinds.join(", "))
        };

        Ok(json!({
            "result": {
                "content": [{
                    "type": "text",
                    "text": text
                }],
                "data": kinds
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn call(server: &McpServer, name: &str, arguments: Value) -> Result<Value, String> {
        server.handle_request(json!({
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        }))
    }

    #[test]
    fn test_initialize_and_list() {
        let server = McpServer::new();
        let init = server.handle_request(json!({"method": "initialize"})).unwrap();
        assert_eq!(init["result"]["serverInfo"]["name"], "text-extractor");

        let list = server.handle_request(json!({"method": "tools/list"})).unwrap();
        let names: Vec<&str> = list["result"]["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["extract_text", "extract_file", "classify_value"]);
        assert!(list["result"]["tools"][0]["inputSchema"]["properties"]["kinds"].is_object());
    }

    #[test]
    fn test_unknown_method_and_tool() {
        let server = McpServer::new();
        assert!(server.handle_request(json!({"method": "nope"})).is_err());
        assert!(call(&server, "nope", json!({})).is_err());
        assert_eq!(call(&server, "extract_text", json!({})).unwrap_err(), "text is required");
    }

    #[test]
    fn test_extract_text() {
        let server = McpServer::new();
        let resp = call(&server, "extract_text", json!({
            "text": "rajr at uol dot com dot br, http://x.com.sg/a, 91234567",
            "kinds": "email,domain,mobile"
        })).unwrap();

        let data = &resp["result"]["data"];
        assert_eq!(data["email"], json!(["rajr@uol.com.br"]));
        assert_eq!(data["domain"], json!(["x.com.sg"]));
        assert_eq!(data["mobile"], json!(["91234567"]));
        assert!(data.get("url").is_none());
    }

    #[test]
    fn test_extract_text_strict_domains() {
        let server = McpServer::new();
        let args = json!({ "text": "file:///etc/hosts", "kinds": "domain" });
        let resp = call(&server, "extract_text", args).unwrap();
        assert_eq!(resp["result"]["data"]["domain"], json!([]));

        let args = json!({ "text": "file:///etc/hosts", "kinds": "domain", "strict_domains": true });
        let err = call(&server, "extract_text", args).unwrap_err();
        assert!(err.contains("file:///etc/hosts"));
    }

    #[test]
    fn test_extract_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "contact: bluebirdof [dot] happiness [at] yahoo [dot] com").unwrap();

        let server = McpServer::new();
        let resp = call(&server, "extract_file", json!({
            "file_path": file.path().to_str().unwrap(),
            "kinds": "email"
        })).unwrap();
        assert_eq!(resp["result"]["data"]["email"], json!(["bluebirdof.happiness@yahoo.com"]));

        let err = call(&server, "extract_file", json!({"file_path": "/definitely/missing.txt"})).unwrap_err();
        assert!(err.starts_with("Error reading file"));
    }

    #[test]
    fn test_classify_value() {
        let server = McpServer::new();
        let resp = call(&server, "classify_value", json!({"value": "91234567"})).unwrap();
        assert_eq!(resp["result"]["data"], json!(["mobile"]));
    }
}
