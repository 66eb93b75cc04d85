//! Behaviour layer of a single portfolio page.
//!
//! Every behaviour is a plain struct with its own state and timers; [`Page`]
//! owns one of each and turns host events into method calls. The `showcase`
//! binary is one such host, drawing the page with raylib.

pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod form;
pub mod gallery;
pub mod hero;
pub mod menu;
pub mod nav;
pub mod page;
pub mod reveal;
pub mod scroll_spy;
pub mod state;
pub mod timer;

pub use carousel::{Carousel, CarouselKind, Indicator};
pub use config::{CarouselConfig, PageConfig, SectionConfig, SlideContent};
pub use error::{Error, Result};
pub use form::{ContactForm, FieldError, FieldName};
pub use menu::ClickTarget;
pub use page::{CarouselAction, Page, PageEvent};
pub use timer::Timer;
