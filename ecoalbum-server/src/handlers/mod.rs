pub mod gallery;
pub mod health;
pub mod species;
