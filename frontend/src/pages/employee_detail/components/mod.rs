pub mod columns;
pub mod filter;
pub mod info;
