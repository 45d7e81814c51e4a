//! # Shotcraft Designer
//!
//! Editing engine for app-store screenshot layouts. A document is an ordered
//! list of layers (text, shapes, images and device mockups) on a fixed-size
//! canvas, edited through direct manipulation with full undo/redo.
//!
//! ## Core Components
//!
//! - **Model**: immutable layer records, style and canvas configuration
//! - **Geometry**: move and 8-handle resize math with a minimum-size floor
//! - **Selection**: selection, duplicate, delete and z-order operations
//! - **History**: bounded snapshot history with branch discarding
//! - **Session**: the single-gesture `Idle -> Dragging -> Idle` controller
//! - **Canvas / DesignerState**: the document aggregate the UI drives
//! - **Templates**: built-in layout patterns
//! - **Generator**: normalization boundary for generated layouts
//! - **Export**: SVG rendering of the visible layers
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (aggregate root)
//!   ├── Canvas (layers, selection, canvas config)
//!   ├── HistoryManager (snapshots of the layer list)
//!   ├── InteractionController (active drag/resize gesture)
//!   └── Viewport (screen <-> canvas transform)
//!
//! Generator / Templates ──> DesignerState::replace_all_layers
//! DesignerState ──> ExportSnapshot ──> SvgExporter
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shotcraft_designer::{DesignerState, Point};
//!
//! let mut state = DesignerState::new();
//! let id = state.add_shape_layer().unwrap();
//!
//! let start = state.canvas.get_layer(&id).unwrap().center();
//! state.pointer_down_on_layer(&id, start);
//! state.pointer_move(Point::new(start.x + 30.0, start.y));
//! state.pointer_up();
//!
//! assert!(state.undo());
//! ```

pub mod canvas;
pub mod designer_state;
pub mod export;
pub mod generator;
pub mod geometry;
pub mod history;
pub mod model;
pub mod selection_manager;
pub mod session;
pub mod templates;
pub mod viewport;

pub use canvas::Canvas;
pub use designer_state::{
    DesignerState, EditorOptions, GenerationStatus, GenerationTicket, HitTarget,
};
pub use export::{export_file_name, ExportError, ExportSink, ExportSnapshot, SvgExporter};
pub use generator::{
    normalize_response, parse_response, GeneratedLayout, GenerationError,
    GenerationErrorCategory, GenerationRequest, GenerationResponse, LayerRecord,
    LayoutGenerator, StylePreset, TemplateGenerator,
};
pub use geometry::{compute_drag, hit_test_handles, DragMode, ResizeHandle};
pub use history::HistoryManager;
pub use model::{
    CanvasConfig, CanvasConfigUpdate, FontWeight, Layer, LayerId, LayerList, LayerStyle,
    LayerType, LayerUpdate, Point, TextAlign,
};
pub use selection_manager::SelectionManager;
pub use session::{DragSession, DragStep, InteractionController, InteractionState};
pub use templates::{builtin_patterns, find_pattern, LayoutPattern};
pub use viewport::Viewport;
