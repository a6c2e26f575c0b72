mod bundle;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, current_lang, set_lang};
pub use format::{fmt_currency, fmt_number, fmt_pct, fmt_rating};
pub use render::{t, tr};
