#[macro_use]
extern crate rust_i18n;

i18n!("locales");

pub mod cli;
pub mod compare;
pub mod error;

pub fn init_locale() {
    rust_i18n::set_locale("en");
}
