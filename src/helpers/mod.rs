pub mod text_helper;
pub mod value_helper;
