mod panel;

pub use panel::LoginPanel;
