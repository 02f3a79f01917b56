pub mod legacy_vis_factory;
pub mod raw_agg_factory;
pub mod static_fields_factory;
pub mod time_range_factory;

pub use legacy_vis_factory::LegacyVisFactory;
pub use raw_agg_factory::RawAggFactory;
pub use static_fields_factory::StaticFieldsFactory;
pub use time_range_factory::TimeRangeFactory;
