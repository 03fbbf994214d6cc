pub mod description;

pub use description::{
    extract_dimensions, infer_glass_type, is_glass_description, panels_from_descriptions,
    ExtractedDimensions,
};
