pub mod clean;
pub mod configure;
