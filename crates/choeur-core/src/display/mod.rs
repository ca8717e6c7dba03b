//! Display wrapper types for terminal output.
//!
//! Domain types stay free of presentation concerns. Each context that needs
//! to be shown gets a small wrapper implementing `Display` and producing
//! markdown, which the CLI renders with or without styling.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Types   │    │ Display Wrapper │    │    Markdown     │
//! │ (Carousel, ...) │───▶│     Types       │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`carousel`]: Current slide, indicators and controls ([`CarouselView`])
//! - [`contact`]: Mailto link or field errors ([`ContactOutcome`])
//! - [`datetime`]: French rendering of content dates ([`FrenchDateTime`])
//! - [`status`]: Success/failure messages ([`OperationStatus`])
//! - [`validation`]: Concert content report ([`ValidationReport`])
//!
//! ## Usage Examples
//!
//! ```rust
//! use choeur_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Message prêt");
//! assert_eq!(status.to_string(), "Success: Message prêt\n");
//! ```
//!
//! ```rust
//! use choeur_core::{
//!     concerts::ConcertValidation,
//!     display::ValidationReport,
//! };
//!
//! let validation = ConcertValidation::default();
//! let report = ValidationReport::new(&validation).to_string();
//! assert!(report.contains("All 0 concerts are valid"));
//! ```

pub mod carousel;
pub mod contact;
pub mod datetime;
pub mod status;
pub mod validation;

pub use carousel::CarouselView;
pub use contact::ContactOutcome;
pub use datetime::FrenchDateTime;
pub use status::OperationStatus;
pub use validation::ValidationReport;
