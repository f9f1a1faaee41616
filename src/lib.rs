pub mod camera;
pub mod cli;
pub mod controls;
pub mod frame;
pub mod geometry;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod types;

pub use camera::Camera;
pub use controls::OrbitControls;
pub use frame::RenderLoop;
pub use scene::{bootstrap, Scene, Stage};
pub use scenes::populate;
