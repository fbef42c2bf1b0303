//! HTTP adapter for the expense tracker backend.

mod client;
mod dto;

pub use client::LedgerHttpClient;
