mod get_field_command;
mod get_field_use_case;

pub use get_field_command::GetFieldCommand;
pub use get_field_use_case::GetFieldUseCase;

#[cfg(test)]
mod get_field_use_case_test;
