mod entry;
mod ledger;
mod money;
mod navigator;

pub use entry::*;
pub use ledger::*;
pub use money::*;
pub use navigator::*;
