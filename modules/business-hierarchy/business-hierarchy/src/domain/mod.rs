pub mod authz;
pub mod error;
pub mod normalize;
pub mod repos;
pub mod service;
pub mod validation;
