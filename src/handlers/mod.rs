pub mod donate_handlers;
pub mod ngo_handlers;
pub mod page_handlers;
