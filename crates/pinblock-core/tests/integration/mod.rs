mod error_messages;
mod padding_distribution;
mod service_roundtrip;
