pub mod composite;
pub mod naming;
pub mod resize;
