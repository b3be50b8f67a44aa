pub mod dnd;
pub mod image_io;

pub use dnd::{first_supported, parse_drop_list, pick_dropped};
pub use image_io::{is_supported, load_image, Image};
