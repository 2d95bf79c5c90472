//! Page components.
//!
//! Each component attaches to the elements it owns and does nothing when
//! they are absent. Loaders return errors for the boot layer to log; the
//! submitters report their outcome on the page and return the final
//! [`SubmitState`](crate::submit::SubmitState).

pub mod detail;
pub mod filter;
pub mod listings;
pub mod login;
pub mod review;
