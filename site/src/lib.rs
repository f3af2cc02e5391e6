// page model for the landing site
//
// everything in here is independent of dioxus and the browser, so the navigation and form
// transitions can be exercised natively.  the webapp crate owns the dom glue and calls into
// these types from its event handlers
pub mod config;
pub mod content;
pub mod form;
pub mod nav;
pub mod scroll;
pub mod section;
pub mod theme;

pub use config::SiteConfig;
pub use form::{ContactForm, Field, FieldError, SubmitOutcome};
pub use nav::{HistoryOp, NavState};
pub use scroll::{LOOK_AHEAD_PX, SectionSpan};
pub use section::Section;
pub use theme::Theme;
