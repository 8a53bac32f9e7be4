pub mod history;
pub mod scene;
pub mod selection;
pub mod session;
pub mod settings;

pub use history::{History, Reversible, DEFAULT_HISTORY_LIMIT};
pub use scene::{object_display_name, short_id, EditorDocument, EditorStore, SceneCommand};
pub use selection::SelectionState;
pub use session::TransformSession;
pub use settings::EditorSettings;
