pub mod composer;
pub mod presets;
