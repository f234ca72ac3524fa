pub mod editor_panel;
pub mod file_list;
pub mod new_workspace_dialog;
pub mod preview_pane;
pub mod prompt_bar;
pub mod status_bar;
pub mod styles;
pub mod workspace_bar;

pub use editor_panel::EditorPanel;
pub use file_list::FileList;
pub use new_workspace_dialog::NewWorkspaceDialog;
pub use preview_pane::PreviewPane;
pub use prompt_bar::PromptBar;
pub use status_bar::StatusBar;
pub use workspace_bar::WorkspaceBar;
