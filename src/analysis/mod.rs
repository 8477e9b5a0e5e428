//! Lap and stint analysis
//!
//! Pure derivations charts consume: typed lap filters, tyre stint
//! aggregation, fastest-lap and quicklap selection, position traces, flag
//! spans, and time/delta formatting.

pub mod filters;
pub mod format;
pub mod stints;

pub use filters::LapFilter;
pub use format::{NOT_AVAILABLE, format_delta, format_time};
pub use stints::{
    FlagSpan, PositionTrace, QUICKLAP_THRESHOLD, Stint, StintOptions, fastest, fastest_by_driver,
    flag_spans, position_trace, quicklaps, rain_laps, stints,
};
