pub mod backdrop;
pub mod footer;
pub mod modal;
pub mod navigation;
pub mod social;
