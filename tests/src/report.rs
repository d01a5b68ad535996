mod presets;
mod scenarios;
