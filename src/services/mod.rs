pub mod error;
pub mod instagram;
pub mod qr;
pub mod redirect;
