pub mod use_demo_cycle;
pub mod use_rings_layout;
