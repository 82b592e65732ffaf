pub mod body;
pub mod facts;
pub mod scene;
pub mod system;

pub use body::{BodyID, BodyInfo, OrbitingBody};
pub use facts::FactTable;
pub use scene::{Scene, Sun};
