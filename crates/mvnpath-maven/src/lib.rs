//! Maven glue: synthetic POM generation, project layout discovery, `mvn`
//! invocation, and parsing of the dependency plugin's output files.

pub mod invoker;
pub mod output;
pub mod pom;
