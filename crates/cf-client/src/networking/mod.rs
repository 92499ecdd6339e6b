// Networking external API (`/v1/external/...`).
//
// Manages container-to-container policies between applications.

pub mod client;
pub mod types;

pub use client::Policies;
