//! `gp-session` — one map page's worth of GeoPet state.
//!
//! A [`MapSession`] replaces the page-global map, marker and route variables
//! with a single owned value.  It drives a [`gp_display::GeoDisplay`] and
//! pushes every derived view out through two collaborators supplied at
//! construction:
//!
//! - a [`MapRenderer`] (required): the interactive map widget;
//! - a [`DisplayPanels`] (optional, [`NoopPanels`] by default): text
//!   regions, form fields, loading indicator and alerts.
//!
//! [`PanelNotifier`] wraps a second panels value so a
//! [`gp_locate::Locator`] can report acquisition problems on the page.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`renderer`] | `MapRenderer` trait, `LayerHandle`, `MarkerSpec`         |
//! | [`panels`]   | `DisplayPanels` trait, `NoopPanels`, `PanelNotifier`     |
//! | [`page`]     | `PageData`, `PageKind` — page dataset attributes         |
//! | [`session`]  | `MapSession` — bootstrap, clicks, manual entry, sync     |
//! | [`builder`]  | `SessionBuilder`                                         |
//! | [`error`]    | `SessionError`, `RenderError` and their result aliases   |
//!
//! # Example
//!
//! ```rust,ignore
//! let mut locator = Locator::new(provider);
//! let mut session = SessionBuilder::new(renderer)
//!     .panels(panels)
//!     .page(PageData::from_dataset(&attrs))
//!     .build()?;
//! session.bootstrap(&mut locator).await?;
//! session.on_map_click(Coordinate { lat: 19.43, lon: -99.14 })?;
//! ```

pub mod builder;
pub mod error;
pub mod page;
pub mod panels;
pub mod renderer;
pub mod session;

#[cfg(test)]
mod tests;

pub use builder::SessionBuilder;
pub use error::{RenderError, RenderResult, SessionError, SessionResult};
pub use page::{PageData, PageKind};
pub use panels::{DisplayPanels, NoopPanels, PanelNotifier};
pub use renderer::{LayerHandle, MapRenderer, MarkerSpec};
pub use session::MapSession;
