mod form;
mod result;
pub mod view;
