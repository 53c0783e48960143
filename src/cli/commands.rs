pub mod check;
pub mod forecast;
pub mod serve;

pub use check::check;
pub use forecast::forecast;
pub use serve::serve;
