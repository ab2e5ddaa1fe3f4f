#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod codes;
pub mod error;
pub mod tables;
pub mod translate;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use codes::{
    CatalogEntry, CodeTable, CoreCode, ExtendedCode, PrecompiledCode, PrecompiledError, Revision,
    status_catalog,
};
pub use error::Error;
pub use tables::{SystemTable, TABLE_KEY_MAX_LENGTH, is_user_table};
pub use translate::decode::{decode_and_translate, parse_output_code};
pub use translate::{resolve_known_message, translate};
