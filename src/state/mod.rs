/// State management module
///
/// This module holds all application state that is independent of iced:
/// - Portfolio catalog and entries (data.rs)
/// - The single-slot portfolio selection (selection.rs)
/// - Site configuration loaded from disk (config.rs)
/// - Contact form validation and outbound links (contact.rs)

pub mod config;
pub mod contact;
pub mod data;
pub mod selection;
