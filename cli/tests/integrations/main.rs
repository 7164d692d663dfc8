mod batch;
mod convert;
mod mcp;
mod server;
mod units;
