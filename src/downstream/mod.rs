pub mod client;

pub use client::RefundApiClient;
