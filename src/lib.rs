pub mod advisor;
pub mod calculator;
pub mod catalog;
pub mod cli;
pub mod herbs;
pub mod optim;
pub mod profiles;
pub mod recipe_card;
