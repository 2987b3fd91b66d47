pub mod shell_command;

pub use shell_command::{Shell, ShellCommandRunner};
