pub mod engine;
pub mod error;
pub mod icon;
pub mod mcp_api;
pub mod model;
pub mod provider;
pub mod translation;
