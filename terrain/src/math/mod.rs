mod haversine;
mod linspace;
mod zero_level;

pub use {
    haversine::haversine_distance,
    linspace::linspace,
    zero_level::{conditional_zero_level, conditional_zero_level_series},
};
