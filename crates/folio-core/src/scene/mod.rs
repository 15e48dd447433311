/// 3D backdrop scene: floating wireframe shapes, a drifting point cloud and
/// a pointer-eased viewpoint, advanced once per display refresh.
pub mod points;
pub mod shape;
pub mod updater;
pub mod viewpoint;

pub use points::PointCloud;
pub use shape::{FloatingShape, ShapeKind, WireMaterial};
pub use updater::{SceneFrame, SceneLoop, SceneRenderer, SceneUpdater};
pub use viewpoint::{PointerState, Viewpoint, Viewport};
