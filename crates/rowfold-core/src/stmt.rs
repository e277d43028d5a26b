mod group_index;
pub use group_index::GroupIndex;

mod value;
pub use value::Value;

mod value_cmp;

mod value_json;

mod value_record;
pub use value_record::ValueRecord;
