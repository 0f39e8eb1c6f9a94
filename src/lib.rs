//! NutriSense Library
//!
//! Health metric formulas and nutrition tracking behind an MCP server.

pub mod analytics;
pub mod build_info;
pub mod config;
pub mod data;
pub mod error;
pub mod health;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod recommendations;
pub mod session;
pub mod tools;
