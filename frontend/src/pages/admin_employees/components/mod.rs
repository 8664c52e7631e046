pub mod filter;
pub mod form;
