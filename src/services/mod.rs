pub mod altafinzione;
pub mod api;
pub mod metrics;
pub mod quality;
