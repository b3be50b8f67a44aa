pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod grid;
pub mod io;
pub mod viewer;
pub mod window;
