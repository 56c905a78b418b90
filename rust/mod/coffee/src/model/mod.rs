mod coffee;

pub use coffee::{Coffee, CoffeeType};
