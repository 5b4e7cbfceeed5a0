//! Component Forge: turn a plain-language description into React, Vue or Svelte code.
//!
//! The server side is a thin proxy ([`routes`], [`completion`]) in front of a hosted
//! chat-completions model. The client side is [`builder::ComponentBuilder`], the state
//! machine behind the page, talking to the proxy through [`client::ChatTransport`].

pub mod assets;
pub mod builder;
pub mod client;
pub mod completion;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod notify;
pub mod prompt;
pub mod routes;
