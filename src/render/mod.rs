pub mod pages;

pub use pages::{NO_ENTITIES_MESSAGE, NO_INTENT_MESSAGE, PAGE_TITLE, Pages};
