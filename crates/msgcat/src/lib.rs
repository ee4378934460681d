pub mod catalog;
pub mod error;
pub mod formats;
#[cfg(feature = "global-locale")]
pub mod global;
pub mod interpolate;
pub mod locale;
pub mod plural;
pub mod types;

pub use catalog::Catalog;
pub use error::{InterpolateError, LoadError, PluralRuleError};
pub use formats::{FormatRegistry, FormatValue};
#[cfg(feature = "global-locale")]
pub use global::{language, set_language, with_locale, with_locale_mut};
pub use interpolate::{interpolate, interpolate_named};
pub use locale::{CONTEXT_SEPARATOR, CatalogData, Locale, gettext_noop};
pub use plural::PluralRule;
pub use types::{Translation, Value};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, or strings directly. The result feeds
/// [`interpolate_named`].
///
/// # Example
///
/// ```
/// use msgcat::{args, Value};
///
/// let a = args! { "sel" => 3, "cnt" => 10 };
/// assert_eq!(a.len(), 2);
/// assert_eq!(a["sel"].as_number(), Some(3));
/// ```
#[macro_export]
macro_rules! args {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
