//! Local web page shell: HTML form controls with server-rendered SVG charts
//! plus JSON endpoints for the same chart specs

mod page;
mod query;
mod server;
mod svg;

pub use server::serve;
