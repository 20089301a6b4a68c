pub mod mapper;
pub mod sampling;
pub mod service;
