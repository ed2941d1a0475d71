//! Demo operands, baked in from `cfg.toml` at build time.

#[toml_cfg::toml_config]
pub struct Settings {
    #[default(1)]
    pub add_lhs: i64,
    #[default(2)]
    pub add_rhs: i64,
    #[default(5)]
    pub run_value: i64,
}
