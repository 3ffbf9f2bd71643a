//! 🍇欢迎光临🍓
//!
//! 涵盖了本 crate 一系列常用的功能.

pub use crate::{Idx2d, Idx3d};

pub use crate::config::ViewConfig;
pub use crate::data::{normalize_by_max, reshape_column_major, ColorScale, LabelSeq};
pub use crate::error::{ViewError, ViewResult};
pub use crate::render::{Colormap, Frame, Origin};
pub use crate::view::{FeatureGrid, Figure, SliceViewer, StitchView, UiEvent};

pub use crate::consts::text::{FEATURE_GRID_TITLE, STITCH_TITLE};

#[cfg(feature = "plot")]
pub use crate::plot::{
    show_classification, show_grid, show_microdoppler, show_range_azimuth, show_stitched,
};
