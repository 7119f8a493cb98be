//! Seeded placement of static set-dressing around the road corridor.

mod props;

pub use props::{
    PopulationConfig, Prop, PropKind, RegionConfig, clearance_samples, clearance_violations,
    generate_props,
};
