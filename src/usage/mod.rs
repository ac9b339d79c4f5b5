pub mod poller;
pub mod store;
pub mod tracker;

#[cfg(test)]
pub(crate) mod test_support;
