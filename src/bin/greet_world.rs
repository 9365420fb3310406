//! Message-variant smoke check.
//!
//! Prints `Hello World <Mode>`, taking the subject from the message
//! collaborator instead of the platform feature. Useful when validating a
//! toolchain without committing to a platform feature matrix.

fn main() {
    println!("{}", buildprobe::greeting::message_line());
}
