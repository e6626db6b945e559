pub mod cmd;
pub mod direction;
pub mod request;
pub mod status;
