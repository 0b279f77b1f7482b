//! # API crate — HTTP client for the collaborator user service
//!
//! Implements [`store::UsersApi`] over the collaborator's REST contract with
//! `reqwest`. The same client compiles for native and wasm32 targets.
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | list | GET | `/api/users` |
//! | create | POST | `/api/users` |
//! | update | PATCH | `/api/users/{id}` |
//! | delete | DELETE | `/api/users/{id}` |
//!
//! The collaborator requires no authentication and supports no pagination;
//! updates always carry all four fields. Transport and status failures map to
//! [`store::ApiError`] and are otherwise not retried.

mod client;
pub use client::{Client, DEFAULT_BASE_URL};
