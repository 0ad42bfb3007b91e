use std::collections::TryReserveError;

use snafu::prelude::*;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("queue storage exhausted: {source}"))]
    StorageExhausted { source: TryReserveError },
}
