pub mod aggregate;
pub mod pairing;
pub mod policy;
pub mod timeline;
