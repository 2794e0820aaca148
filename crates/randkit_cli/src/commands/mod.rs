//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands build their
//! output as lines so that tests can inspect it; `run` prints them.

pub mod check;
pub mod draw;
pub mod roll;
pub mod table;

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
