//! Design constants shared by the editor crates.

/// Smallest width or height (canvas units) a layer may have after any mutation.
pub const MIN_LAYER_SIZE: f64 = 10.0;

/// Number of layer-list snapshots retained by the undo history.
pub const HISTORY_CAPACITY: usize = 50;

/// Offset applied to both axes when a layer is duplicated.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Suffix appended to the name of a duplicated layer.
pub const DUPLICATE_SUFFIX: &str = " Copy";

/// Keyboard nudge distances (canvas units).
pub const NUDGE_STEP: f64 = 1.0;
pub const NUDGE_STEP_LARGE: f64 = 10.0;

/// Side length of a resize grip drawn on the selection box.
pub const HANDLE_SIZE: f64 = 12.0;

/// Default document size: an iPhone Pro Max screenshot (1284x2778) at 1/3 scale.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1284.0 / 3.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 2778.0 / 3.0;
pub const DEFAULT_BACKGROUND_COLOR: &str = "#1e293b";

/// Sentinel stored in the `content` of device mockup layers.
pub const DEVICE_FRAME_CONTENT: &str = "device_frame";
