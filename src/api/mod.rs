//! Backend API client for SEObot
//!
//! This module contains the HTTP client for the SEO backend and the
//! request/response payload types for its three operations: website
//! analysis, article generation, and chat.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{
    AnalyzeRequest, AnalyzeResponse, ApiErrorBody, ChatRequest, ChatResponse, GenerateRequest,
    GenerateResponse,
};
