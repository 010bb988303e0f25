pub mod buckets;
pub mod jwt;
pub mod notifier;
