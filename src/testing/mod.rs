mod scripted_runner;

pub use scripted_runner::ScriptedRunner;
