pub mod car;
pub mod tests;

pub use car::Car;
pub use car::Motion;
