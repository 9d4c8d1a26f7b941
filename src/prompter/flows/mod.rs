pub mod menu_flow;
