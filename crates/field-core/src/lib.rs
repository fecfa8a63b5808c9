pub mod config;
pub mod constants;
pub mod edges;
pub mod error;
pub mod field;
pub mod projection;
pub mod rotation;
pub mod scheduler;
pub mod sphere;
pub mod surface;

pub use config::*;
pub use constants::*;
pub use edges::*;
pub use error::*;
pub use field::*;
pub use projection::*;
pub use rotation::*;
pub use scheduler::*;
pub use sphere::*;
pub use surface::*;
