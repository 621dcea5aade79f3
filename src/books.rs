pub mod domain;
pub mod dto;
pub mod factory;
pub mod generator;
pub mod repository;
pub mod seed;
