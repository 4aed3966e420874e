//! autocomplete-widget: interaction controller for an accessible autocomplete
//!
//! This crate owns the combobox interaction state machine: query text,
//! option lookups through an `autocomplete-engine` source, keyboard and
//! pointer navigation, blur reconciliation and the external mutation
//! watcher. Rendering is left to the host, which consumes [`WidgetState`]
//! (or the [`WidgetView`] projection) and carries out [`WidgetAction`]s.

pub mod config;
pub mod core;

pub use config::Settings;
pub use core::keycode::{KeyCode, KeyEvent, KeyKind};
pub use core::platform::PlatformTraits;
pub use core::state::{Target, WidgetState};
pub use core::templates::Templates;
pub use core::view::{OptionRow, WidgetView};
pub use core::widget::{
    Autocomplete, BlurKind, InputProbe, SharedInput, WidgetAction, WidgetConfig, WidgetEvent,
    WidgetResult,
};
