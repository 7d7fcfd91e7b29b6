//! # hola_mundo
//!
//! Console greeting library. Asks for a name, greets it and reports
//! its length and its reversal.
//!
//! - [`greet`] builds the greeting line
//! - [`name_info`] counts and reverses a name
//! - [`driver::run`] runs the whole interactive session

pub mod driver;
pub mod error;
pub mod greeter;
pub mod messages;
pub mod name;
pub mod name_info;

pub use error::{GreetError, Result};
pub use greeter::greet;
pub use name::{Name, DEFAULT_NAME};
pub use name_info::{name_info, NameInfo};
