pub mod content;
pub mod donation;
pub mod nav_item;
pub mod ngo;
