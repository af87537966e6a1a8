// Composition root: configuration, wiring of handlers and the HTTP/GraphQL surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
