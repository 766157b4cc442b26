// Template planner: fixed lookup tables + a pure selector over them.
// No provider calls anywhere under this module.

pub mod export;
pub mod handlers;
pub mod selector;
pub mod templates;
