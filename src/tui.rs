//! Terminal front end: a menu scene to configure the session and a table scene
//! to play it. Everything here goes through [`crate::engine`].

pub mod app;
pub mod controller;
mod ui;
