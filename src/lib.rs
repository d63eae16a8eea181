// Library root
// -----------
// The binary (`main.rs`) wires these modules into the interactive
// Pokedex prompt.
//
// Module responsibilities:
// - `api`: blocking HTTP client and the page envelope it decodes.
// - `session`: the next/previous cursors and the fetch operations that
//   move them.
// - `commands`: the fixed command table and input normalization.
// - `ui`: the prompt loop that reads lines and prints results.
// - `config`, `error`: startup settings and the error type shared by all
//   of the above.
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;
pub mod ui;
