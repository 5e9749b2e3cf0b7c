//! casenav: section and subsection navigation for case-study modals.
//!
//! The engine presents a fixed taxonomy of sections, each with ordered subsections, and moves a
//! visitor through it by click, arrow key or a paged menu window. Changes are serialised by a
//! single-flight transition guard whose completions run on a virtual timeline, and the modal's
//! opening can grow out of the rectangle of whatever launched it.
#![allow(clippy::multiple_crate_versions)]

pub mod anchor;
pub mod app_state;
pub mod config;
pub mod controller;
pub mod error;
pub mod formats;
pub mod guard;
pub mod index;
pub mod keymap;
pub mod menu;
pub mod modal;
pub mod outline;
pub mod scroll;
pub mod section;
pub mod timeline;
pub mod ui;

pub use controller::{Navigation, NavigationController, NavigationState};
pub use error::NavError;
pub use index::NavigationIndex;
pub use modal::{CaseStudyModal, Event, Input, ModalOptions, Presentation, RenderState};
