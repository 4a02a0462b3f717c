pub mod clock;
pub mod error;
pub mod evaluator;
pub mod frame;
pub mod gpu;
pub mod kernel;
pub mod phase;
pub mod scene;

pub use clock::DayClock;
pub use error::SkyError;
pub use evaluator::{SceneLayout, TimeOfDayEvaluator};
pub use frame::{CloudLayerShade, CloudScroll, CloudShading, FrameOutput, SurfaceState, TransitionOutput};
pub use phase::{DayPhase, TransitionTrigger};
pub use scene::{SceneSink, SceneState};
