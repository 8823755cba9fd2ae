pub mod cancel;
pub mod cli;
pub mod config;
pub mod controller;
pub mod dom;
pub mod logging;
pub mod search;
pub mod ui;
