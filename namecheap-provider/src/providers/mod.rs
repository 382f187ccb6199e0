//! Registrar provider implementations

mod namecheap;

pub use namecheap::{NamecheapProvider, NamecheapProviderBuilder, build_set_hosts_body};
