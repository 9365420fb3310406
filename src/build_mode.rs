// Build-mode tag selection
//
// Follows the compile profile: dev builds carry debug_assertions and report
// "Debug", everything else reports "Release". There is no runtime override.

#[cfg(debug_assertions)]
pub const BUILD_MODE: &str = "Debug";

#[cfg(not(debug_assertions))]
pub const BUILD_MODE: &str = "Release";
