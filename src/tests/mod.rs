// Test modules for all components
pub mod test_bounce;
pub mod test_network;
