pub mod font_store;
pub mod walker;

pub use font_store::{FontHandle, FontStore};
pub use walker::collect_source_files;
