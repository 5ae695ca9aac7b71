//! SeaORM adapters: generic over `ConnectionTrait`, returning `DbErr`.

pub mod games_sea;
pub mod pictures_sea;
pub mod players_sea;
pub mod turns_sea;
