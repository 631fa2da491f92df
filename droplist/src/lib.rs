pub mod error;
pub mod event;
pub mod focus;
pub mod select;
pub mod terminal;

pub use error::Error;

pub mod prelude {
    pub use crate::error::Error;
    pub use crate::event::{EventResult, Key, KeyCombo, Modifiers, ScrollDirection};
    pub use crate::focus::FocusRing;
    pub use crate::select::{
        OptionRow, Select, SelectCtx, SelectOption, SelectOutcome, Selection,
    };
    pub use crate::terminal::TerminalSession;
}
