pub mod domain;
pub mod error;
pub mod gauge;
pub mod protocol;
