pub mod csv;
pub mod download;
pub mod message;
pub mod status;
pub mod storage;
pub mod time;
pub mod token;
