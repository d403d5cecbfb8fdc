pub mod bool3;
pub mod hex;
pub mod vector2;

pub use bool3::Bool3;
pub use vector2::Vector2;
