// Platform selection and feature flags
//
// Platform choice is opt-in and explicit. Selection happens entirely at
// compile time, so a binary can never report a platform it was not built
// for and unsupported configurations never reach runtime.

#[cfg(feature = "linux")]
pub const PLATFORM: &str = "Linux";

#[cfg(feature = "windows")]
pub const PLATFORM: &str = "Windows";

#[cfg(feature = "osx")]
pub const PLATFORM: &str = "OSX";

#[cfg(feature = "freebsd")]
pub const PLATFORM: &str = "FreeBSD";

#[cfg(not(any(
    feature = "linux",
    feature = "windows",
    feature = "osx",
    feature = "freebsd"
)))]
compile_error!(
    "no platform selected: enable exactly one of the features `linux`, `windows`, `osx`, `freebsd`"
);

#[cfg(all(feature = "linux", feature = "windows"))]
compile_error!("platform features `linux` and `windows` are mutually exclusive");

#[cfg(all(feature = "linux", feature = "osx"))]
compile_error!("platform features `linux` and `osx` are mutually exclusive");

#[cfg(all(feature = "linux", feature = "freebsd"))]
compile_error!("platform features `linux` and `freebsd` are mutually exclusive");

#[cfg(all(feature = "windows", feature = "osx"))]
compile_error!("platform features `windows` and `osx` are mutually exclusive");

#[cfg(all(feature = "windows", feature = "freebsd"))]
compile_error!("platform features `windows` and `freebsd` are mutually exclusive");

#[cfg(all(feature = "osx", feature = "freebsd"))]
compile_error!("platform features `osx` and `freebsd` are mutually exclusive");
