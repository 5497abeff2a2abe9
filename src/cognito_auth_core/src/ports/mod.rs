pub mod identity_provider;
