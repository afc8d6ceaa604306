//! Easing name parsing through the config layer

use glowchat_core::animation::Easing;
use glowchat_core::config::AppConfig;

#[test]
fn every_easing_name_parses() {
    for easing in [
        Easing::Linear,
        Easing::Quad,
        Easing::Cubic,
        Easing::Sine,
        Easing::Bounce,
        Easing::Ease,
    ] {
        let toml = format!("[animation.x]\nforward_easing = \"{}\"\n", easing.name());
        let config = AppConfig::from_toml_str(&toml).expect("valid config");
        assert_eq!(config.animation.x.forward_easing, easing);
    }
}

#[test]
fn default_easing_is_linear() {
    assert_eq!(Easing::default(), Easing::Linear);
}
