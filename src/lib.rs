mod gui;
mod life;
mod patterns;
mod universe;

pub use gui::{App, Config};
pub use life::LifeGrid;
pub use patterns::Pattern;
pub use universe::Universe;
