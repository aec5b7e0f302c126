// Game logic: actors, combat, the world and the play session

pub mod characters;
pub mod combat;
pub mod config;
pub mod session;
pub mod sprites;
pub mod world;
