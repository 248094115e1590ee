mod create_field_command;
mod create_field_use_case;

pub use create_field_command::CreateFieldCommand;
pub use create_field_use_case::CreateFieldUseCase;
