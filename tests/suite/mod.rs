mod config;
mod entitlements;
