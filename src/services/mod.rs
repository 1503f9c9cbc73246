pub mod finder;
pub mod forecast;
pub mod resolver;
