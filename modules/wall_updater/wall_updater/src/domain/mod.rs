pub mod credentials;
pub mod error;
pub mod helpdocs;
pub mod local_client;
pub mod ports;
pub mod sanitize;
pub mod service;
