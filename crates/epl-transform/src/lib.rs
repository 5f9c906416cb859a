pub mod merge;
pub mod normalize;

pub use merge::{MISSING_MARKER, merge_frames, write_dataset};
pub use normalize::{
    NormalizeOptions, NormalizedFrame, Notice, SchemaCheckMode, normalize_table,
};
