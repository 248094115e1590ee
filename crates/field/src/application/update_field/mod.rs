mod update_field_command;
mod update_field_use_case;

pub use update_field_command::UpdateFieldCommand;
pub use update_field_use_case::UpdateFieldUseCase;
