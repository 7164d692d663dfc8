#[cfg(feature = "mcp")]
pub mod server {
    use anyhow::Result;
    use serde::{Deserialize, Serialize};
    use std::io::{self, BufRead, Write};
    use tracing::{debug, error, info};
    use unitconv::{Engine, UnitListing};

    const PROTOCOL_VERSION: &str = "2024-11-05";
    const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

    #[derive(Debug, Deserialize)]
    pub(crate) struct McpRequest {
        jsonrpc: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<serde_json::Value>,
        method: String,
        #[serde(default)]
        params: Option<serde_json::Value>,
    }

    #[derive(Debug, Serialize)]
    pub(crate) struct McpResponse {
        jsonrpc: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<serde_json::Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        result: Option<serde_json::Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<McpError>,
    }

    #[derive(Debug, Serialize)]
    struct McpError {
        code: i32,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        data: Option<serde_json::Value>,
    }

    impl McpError {
        fn parse_error(message: String) -> Self {
            Self {
                code: -32700,
                message,
                data: None,
            }
        }

        fn invalid_request(message: String) -> Self {
            Self {
                code: -32600,
                message,
                data: None,
            }
        }

        fn method_not_found(method: String) -> Self {
            Self {
                code: -32601,
                message: format!("Method not found: {}", method),
                data: None,
            }
        }

        fn invalid_params(message: String) -> Self {
            Self {
                code: -32602,
                message,
                data: None,
            }
        }
    }

    impl From<unitconv::ConversionError> for McpError {
        fn from(err: unitconv::ConversionError) -> Self {
            McpError::invalid_params(err.to_string())
        }
    }

    pub(crate) struct McpServer {
        engine: Engine,
    }

    impl McpServer {
        pub(crate) fn new(engine: Engine) -> Self {
            Self { engine }
        }

        pub(crate) fn handle_request(&self, request: McpRequest) -> McpResponse {
            debug!("Handling request: method={}", request.method);

            if request.jsonrpc != "2.0" {
                return McpResponse {
                    jsonrpc: "2.0".to_string(),
                    id: request.id,
                    result: None,
                    error: Some(McpError::invalid_request(
                        "Invalid JSON-RPC version, expected '2.0'".to_string(),
                    )),
                };
            }

            let result = match request.method.as_str() {
                "initialize" => self.initialize(),
                "tools/list" => self.list_tools(),
                "tools/call" => self.call_tool(request.params),
                _ => Err(McpError::method_not_found(request.method)),
            };

            match result {
                Ok(result) => McpResponse {
                    jsonrpc: "2.0".to_string(),
                    id: request.id,
                    result: Some(result),
                    error: None,
                },
                Err(error) => McpResponse {
                    jsonrpc: "2.0".to_string(),
                    id: request.id,
                    result: None,
                    error: Some(error),
                },
            }
        }

        fn initialize(&self) -> Result<serde_json::Value, McpError> {
            info!("Initializing MCP server");
            Ok(serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "serverInfo": {
                    "name": "unitconv-mcp-server",
                    "version": SERVER_VERSION
                },
                "capabilities": {
                    "tools": {}
                }
            }))
        }

        fn list_tools(&self) -> Result<serde_json::Value, McpError> {
            debug!("Listing tools");
            Ok(serde_json::json!({
                "tools": [
                    {
                        "name": "convert",
                        "description": "Convert a single value between two units of the same category (temperature, distance, speed or pressure).",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "value": {
                                    "type": "number",
                                    "description": "The value to convert"
                                },
                                "from": {
                                    "type": "string",
                                    "description": "Source unit, case-insensitive (e.g., 'celsius', 'f', 'miles', 'mph')"
                                },
                                "to": {
                                    "type": "string",
                                    "description": "Target unit, case-insensitive (e.g., 'fahrenheit', 'km', 'kph')"
                                }
                            },
                            "required": ["value", "from", "to"]
                        }
                    },
                    {
                        "name": "batch_convert",
                        "description": "Convert several values with the same unit pair. Results keep the input order.",
                        "inputSchema": {
                            "type": "object",
                            "properties": {
                                "values": {
                                    "description": "Array of numbers, or a comma-separated string (e.g., '32,50,100')",
                                    "oneOf": [
                                        { "type": "array", "items": { "type": "number" } },
                                        { "type": "string" }
                                    ]
                                },
                                "from": {
                                    "type": "string",
                                    "description": "Source unit"
                                },
                                "to": {
                                    "type": "string",
                                    "description": "Target unit"
                                }
                            },
                            "required": ["values", "from", "to"]
                        }
                    },
                    {
                        "name": "list_units",
                        "description": "List all accepted unit names grouped by category.",
                        "inputSchema": {
                            "type": "object",
                            "properties": {}
                        }
                    }
                ]
            }))
        }

        fn call_tool(&self, params: Option<serde_json::Value>) -> Result<serde_json::Value, McpError> {
            let params =
                params.ok_or_else(|| McpError::invalid_params("Missing params".to_string()))?;

            let tool_name = params["name"]
                .as_str()
                .ok_or_else(|| McpError::invalid_params("Missing tool name".to_string()))?;

            let empty = serde_json::json!({});
            let arguments = params.get("arguments").unwrap_or(&empty);

            debug!("Calling tool: {}", tool_name);

            match tool_name {
                "convert" => self.tool_convert(arguments),
                "batch_convert" => self.tool_batch_convert(arguments),
                "list_units" => self.tool_list_units(),
                _ => Err(McpError::invalid_params(format!(
                    "Unknown tool: {}",
                    tool_name
                ))),
            }
        }

        fn tool_convert(&self, args: &serde_json::Value) -> Result<serde_json::Value, McpError> {
            let value = args["value"]
                .as_f64()
                .ok_or_else(|| McpError::invalid_params("Missing 'value' field".to_string()))?;
            let (from, to) = unit_pair(args)?;

            let result = self.engine.convert(value, from, to).map_err(|e| {
                error!("Conversion failed: {}", e);
                McpError::from(e)
            })?;

            info!("Converted {} {} to {}", value, from, to);

            Ok(text_content(format!(
                "{} {} = {} {} ({})",
                result.value, result.from, result.result, result.to, result.category
            )))
        }

        fn tool_batch_convert(
            &self,
            args: &serde_json::Value,
        ) -> Result<serde_json::Value, McpError> {
            let (from, to) = unit_pair(args)?;

            let batch = match &args["values"] {
                serde_json::Value::String(values) => self.engine.convert_batch_str(values, from, to),
                serde_json::Value::Array(items) => {
                    let values = items
                        .iter()
                        .enumerate()
                        .map(|(position, item)| {
                            item.as_f64().ok_or_else(|| {
                                unitconv::ConversionError::InvalidNumber {
                                    position,
                                    token: item.to_string(),
                                }
                            })
                        })
                        .collect::<Result<Vec<f64>, _>>()?;
                    self.engine.convert_batch(&values, from, to)
                }
                _ => {
                    return Err(McpError::invalid_params(
                        "Missing 'values' field".to_string(),
                    ))
                }
            }
            .map_err(|e| {
                error!("Batch conversion failed: {}", e);
                McpError::from(e)
            })?;

            let mut output = format!(
                "## {} {} value(s): {} -> {}\n\n",
                batch.count, batch.category, batch.from, batch.to
            );
            for conversion in &batch.conversions {
                output.push_str(&format!("- {} -> {}\n", conversion.value, conversion.result));
            }

            info!("Batch converted {} value(s)", batch.count);

            Ok(text_content(output))
        }

        fn tool_list_units(&self) -> Result<serde_json::Value, McpError> {
            let listing: UnitListing = self.engine.list_units();

            let mut output = String::from("## Supported Units\n\n");
            for category in &listing.categories {
                output.push_str(&format!(
                    "- **{}**: {}\n",
                    category,
                    listing.aliases(*category).join(", ")
                ));
            }

            debug!("Listed {} categories", listing.categories.len());

            Ok(text_content(output))
        }
    }

    fn unit_pair(args: &serde_json::Value) -> Result<(&str, &str), McpError> {
        let from = args["from"]
            .as_str()
            .ok_or_else(|| McpError::invalid_params("Missing 'from' field".to_string()))?;
        let to = args["to"]
            .as_str()
            .ok_or_else(|| McpError::invalid_params("Missing 'to' field".to_string()))?;
        Ok((from, to))
    }

    fn text_content(text: String) -> serde_json::Value {
        serde_json::json!({
            "content": [{
                "type": "text",
                "text": text
            }]
        })
    }

    pub fn start_server(engine: Engine) -> Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "unitconv=info".into()),
            )
            .with_writer(io::stderr)
            .init();

        info!("Starting unitconv MCP server v{}", SERVER_VERSION);
        info!("Protocol version: {}", PROTOCOL_VERSION);

        let server = McpServer::new(engine);
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        for line in stdin.lock().lines() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            debug!("Received: {}", line);

            let response = match serde_json::from_str::<McpRequest>(&line) {
                Ok(request) => server.handle_request(request),
                Err(e) => {
                    error!("Parse error: {}", e);
                    McpResponse {
                        jsonrpc: "2.0".to_string(),
                        id: None,
                        result: None,
                        error: Some(McpError::parse_error(format!("Parse error: {}", e))),
                    }
                }
            };

            let response_json = serde_json::to_string(&response)?;
            writeln!(stdout, "{}", response_json)?;
            stdout.flush()?;

            debug!("Sent response");
        }

        info!("MCP server shutting down");
        Ok(())
    }

}

#[cfg(not(feature = "mcp"))]
pub mod server {
    use anyhow::Result;
    use unitconv::Engine;

    pub fn start_server(_engine: Engine) -> Result<()> {
        anyhow::bail!("MCP feature not enabled. Recompile with --features mcp")
    }
}
