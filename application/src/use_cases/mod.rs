//! Use cases (application services)

pub mod execute_tool;
pub mod relay_prompt;
pub mod run_tool_loop;
pub mod system_prompt;

#[cfg(test)]
pub(crate) mod test_support;
