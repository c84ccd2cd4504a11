pub mod filter;
pub mod harvester;
pub mod settings;
