pub mod client;

pub use client::RagClient;
