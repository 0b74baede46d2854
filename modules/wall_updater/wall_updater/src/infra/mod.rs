pub mod rails_client;

pub use rails_client::RailsWallClient;
