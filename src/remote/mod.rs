//! Hosted REST table backend (PostgREST / Supabase style).

mod client;

pub use client::{RestTable, rest_endpoint};
