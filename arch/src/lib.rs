pub mod directive;
pub mod op;

pub use directive::Directive;
pub use op::Mnemonic;

/// Size of the addressable memory. Addresses are one byte wide.
pub const MEM_SIZE: usize = 256;
