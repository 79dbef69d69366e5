//! Layer builders shared by the configuration tests.

use ortho_config::MergeComposer;
use serde_json::Value;

use crate::PunnetConfig;

/// Source a test layer is pushed as, lowest precedence first.
#[derive(Debug, Clone, Copy)]
pub enum Layer {
    Defaults,
    File,
    Environment,
    Cli,
}

impl Layer {
    fn push_onto(self, composer: &mut MergeComposer, value: Value) {
        match self {
            Self::Defaults => composer.push_defaults(value),
            Self::File => composer.push_file(value, None),
            Self::Environment => composer.push_environment(value),
            Self::Cli => composer.push_cli(value),
        }
    }
}

/// Merges the given layers, in order, into a [`PunnetConfig`].
pub fn config_from_layers(layers: &[(Layer, Value)]) -> PunnetConfig {
    let mut composer = MergeComposer::new();
    for (layer, value) in layers {
        layer.push_onto(&mut composer, value.clone());
    }
    PunnetConfig::merge_from_layers(composer.layers()).expect("layers should merge")
}

/// Reads one of the textual settings by its configuration key.
pub fn text_setting<'a>(config: &'a PunnetConfig, key: &str) -> Option<&'a str> {
    match key {
        "base_url" => Some(config.base_url.as_str()),
        "results_dir" => Some(config.results_dir.as_str()),
        "evaluator" => config.evaluator.as_deref(),
        "headline" => config.headline.as_deref(),
        "log_file" => config.log_file.as_deref(),
        _ => panic!("not a textual setting: {key}"),
    }
}
