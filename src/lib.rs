//! buildprobe - Cross-compilation smoke check.
//!
//! This library backs a pair of trivial binaries used to validate that a
//! toolchain can compile, link, and run a program for each supported target
//! OS. The binaries print one line identifying the platform the build was
//! configured for and whether it is a debug or release build.
//!
//! # Features
//!
//! - **Platform tags**: `linux`, `windows`, `osx`, `freebsd` cargo features
//!   select the reported platform; exactly one must be enabled or the build
//!   fails
//! - **Build-mode tag**: debug or release, taken from the compile profile
//! - **Message variant**: the `greet_world` binary substitutes a fixed
//!   message for the platform tag
//!
//! # Quick Start
//!
//! ```
//! use buildprobe::greeting::platform_line;
//!
//! // "Hello <Platform> <Mode>", ready to print
//! let line = platform_line();
//! assert!(line.starts_with("Hello "));
//! ```
//!
//! # Modules
//!
//! - [`build_mode`] - Build-mode tag (Debug/Release)
//! - [`error`] - Error types
//! - [`greeting`] - Greeting line assembly
//! - [`message`] - Message collaborator for the message variant
//! - [`platform`] - Platform tag selection via cargo features

pub mod build_mode;
pub mod error;
pub mod greeting;
pub mod message;
pub mod platform;

// Re-export the tags and line builders for external use
pub use build_mode::BUILD_MODE;
pub use greeting::{greeting_line, message_line, platform_line, GREETING_PREFIX};
pub use platform::PLATFORM;
