//! Use cases, one struct per user-visible command plus the bootstrap flow.

pub mod bootstrap_python;
pub mod jump_past_link;
pub mod paste_link;
pub mod revert_link;

#[cfg(test)]
pub(crate) mod tests;
