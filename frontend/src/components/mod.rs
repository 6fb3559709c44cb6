pub mod chat_stage;
pub mod feedback;
pub mod settings_panel;
