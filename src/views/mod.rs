pub mod chat;
pub mod home;
pub mod shared;
pub mod sidebar;

pub use chat::ChatView;
pub use home::HomeView;
pub use sidebar::ChatSidebar;
