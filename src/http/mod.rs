mod client;

pub use client::{get_base_url, HttpClient};
