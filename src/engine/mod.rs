// Engine modules: assets, input, tick clock

pub mod assets;
pub mod game_loop;
pub mod input;
