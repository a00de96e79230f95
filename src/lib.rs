// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Lead Inbox
//!
//! Extracts sales leads from a flat dump of forwarded real-estate listing
//! emails. Each email in the dump starts with a `Correo: De: <sender>` line
//! and ends with a `Content-Type: text/html; charset="UTF-8"` line; the
//! sender's domain selects the field grammar used for the lines between.
//!
//! # Supported platforms
//!
//! - Ciencuadras (`ciencuadras.com`)
//! - Fincaraiz (`fincaraiz.com.co`)
//! - Metrocuadrado (`metrocuadrado.com`)
//! - Proppit (`proppit.com`)
//!
//! Emails from any other sender are skipped.
//!
//! # Example
//!
//! ```rust
//! use lead_inbox::LeadExtractor;
//!
//! let dump = "Correo: De: <avisos@ciencuadras.com>\n\
//!             *Nombre:* John Doe\n\
//!             Content-Type: text/html; charset=\"UTF-8\"";
//! let outcome = LeadExtractor::new().extract_str(dump);
//!
//! assert_eq!(outcome.leads[0].client, "John Doe");
//! assert_eq!(outcome.leads[0].company, "CIEN CUADRAS");
//! ```

mod accumulator;
mod config;
mod detector;
mod error;
mod extractor;
pub mod extractors;
mod filter;
mod inbox;
mod reporter;
mod schema;
mod types;

pub use accumulator::RecordAccumulator;
pub use config::{INBOX_PATH_ENV, InboxConfig};
pub use detector::{
    BOUNDARY_MARKER, HEADER_MARKER, detect_platform, is_boundary, is_header, sender_domain,
};
pub use error::{InboxError, Result};
pub use extractor::{LeadExtractor, LeadStream, ParseOutcome};
pub use extractors::{ExtractorRegistry, FieldExtractor};
pub use filter::{Verdict, evaluate};
pub use inbox::Inbox;
pub use reporter::{ParseReport, StreamReporter};
pub use types::*;
