#![forbid(unsafe_code)]

pub mod colorize;
pub mod decode;
pub mod error;
pub mod model;
pub mod wheel;

pub use colorize::{FrameRgb, colorize, colorize_with, max_radius};
pub use decode::{TAG, decode_bytes, load};
pub use error::{FlovizError, FlovizResult};
pub use model::{FlowField, FlowVector};
pub use wheel::{ColorWheel, NCOLS};
