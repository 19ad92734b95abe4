use std::fmt;

use colored::Colorize;

fn exit_with_message(msg: String) -> ! {
    eprintln!("{} {}", "error:".red().bold(), msg);
    std::process::exit(1);
}

/// Terminates the program with status 1 instead of propagating a failure any further.
pub trait OrExit<T> {
    fn unwrap_or_exit<M: fmt::Display>(self, with_msg_prefix: Option<M>) -> T;
}

impl<T, E: fmt::Display> OrExit<T> for Result<T, E> {
    fn unwrap_or_exit<M: fmt::Display>(self, with_msg_prefix: Option<M>) -> T {
        match self {
            Ok(value) => value,
            Err(why) => match with_msg_prefix {
                None => exit_with_message(why.to_string()),
                Some(msg) => exit_with_message(format!("{}: {}", msg, why))
            }
        }
    }
}

impl<T> OrExit<T> for Option<T> {
    fn unwrap_or_exit<M: fmt::Display>(self, with_msg_prefix: Option<M>) -> T {
        match self {
            Some(value) => value,
            None => match with_msg_prefix {
                None => exit_with_message("expected the Option to have some value".to_string()),
                Some(msg) => exit_with_message(msg.to_string())
            }
        }
    }
}
