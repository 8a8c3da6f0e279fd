pub use self::{game::*, title::*};

mod game;
mod title;
