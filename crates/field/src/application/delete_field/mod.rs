mod delete_field_command;
mod delete_field_use_case;

pub use delete_field_command::DeleteFieldCommand;
pub use delete_field_use_case::DeleteFieldUseCase;

#[cfg(test)]
mod delete_field_use_case_test;
