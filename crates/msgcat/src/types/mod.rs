mod translation;
mod value;

pub use translation::Translation;
pub use value::Value;
