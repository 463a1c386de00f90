//! Public error type aggregating the member crates' errors.
//!
//! Every failure in the toolkit is the analogue of a translation-aborting
//! diagnostic: either a layout query had no answer or a value-level
//! precondition was violated. Embedders typically convert these into their
//! own diagnostics at the boundary.

use thiserror::Error;

use qualia_types::LayoutError;
use qualia_values::TypeError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Type(#[from] TypeError),
}
