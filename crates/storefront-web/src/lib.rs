//! storefront-web - Web frontend for the storefront using Leptos, with an Axum
//! server for the navigation data behind the `ssr` feature

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::{create_router, run};
