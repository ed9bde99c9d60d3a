use crate::cli::{BleOptions, DiscoveryOptions, GatewayOptions, MqttOptions};

use super::gateway::GatewayConfig;

/// Writes every value present in a set of options onto a resolved
/// configuration, leaving keys whose option is `None` untouched.
pub(crate) trait Overlay {
    fn overlay(&self, config: &mut GatewayConfig);
}

fn set<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

impl Overlay for MqttOptions {
    fn overlay(&self, config: &mut GatewayConfig) {
        set(&mut config.host, &self.host);
        set(&mut config.port, &self.port);
        set(&mut config.user, &self.user);
        set(&mut config.pass, &self.pass);
        set(&mut config.publish_topic, &self.publish_topic);
        set(&mut config.subscribe_topic, &self.subscribe_topic);
        set(&mut config.lwt_topic, &self.lwt_topic);
        set(&mut config.presence_topic, &self.presence_topic);
        set(&mut config.presence, &self.presence);
        set(&mut config.publish_all, &self.publish_all);
    }
}

impl Overlay for BleOptions {
    fn overlay(&self, config: &mut GatewayConfig) {
        set(&mut config.ble_scan_time, &self.ble_scan_time);
        set(&mut config.ble_time_between_scans, &self.ble_time_between_scans);
        set(&mut config.adapter, &self.adapter);
        set(&mut config.scanning_mode, &self.scanning_mode);
        set(&mut config.time_sync, &self.time_sync);
        set(&mut config.time_format, &self.time_format);
        set(&mut config.publish_advdata, &self.publish_advdata);
    }
}

impl Overlay for DiscoveryOptions {
    fn overlay(&self, config: &mut GatewayConfig) {
        set(&mut config.discovery, &self.discovery);
        set(&mut config.hass_discovery, &self.hass_discovery);
        set(&mut config.discovery_topic, &self.discovery_topic);
        set(&mut config.discovery_device_name, &self.discovery_device_name);
        set(&mut config.discovery_filter, &self.discovery_filter);
    }
}

impl Overlay for GatewayOptions {
    fn overlay(&self, config: &mut GatewayConfig) {
        set(&mut config.log_level, &self.log_level);
        self.mqtt.overlay(config);
        self.ble.overlay(config);
        self.discovery.overlay(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{LogLevel, ScanningMode};

    #[test]
    fn overlay_prefers_option_when_present() {
        let mut config = GatewayConfig::defaults().clone();
        let options = MqttOptions {
            host: Some("broker".to_string()),
            presence: Some(1),
            ..Default::default()
        };

        options.overlay(&mut config);

        assert_eq!(config.host, "broker");
        assert_eq!(config.presence, 1);
        assert_eq!(
            config.port,
            GatewayConfig::defaults().port,
            "keeps base when option missing"
        );
    }

    #[test]
    fn overlay_writes_explicit_zero() {
        let mut config = GatewayConfig::defaults().clone();
        assert_eq!(config.publish_all, 1);

        let options = MqttOptions {
            publish_all: Some(0),
            ..Default::default()
        };
        options.overlay(&mut config);

        assert_eq!(config.publish_all, 0);
    }

    #[test]
    fn gateway_options_overlay_every_group() {
        let mut config = GatewayConfig::defaults().clone();
        let options = GatewayOptions {
            log_level: Some(LogLevel::Error),
            mqtt: MqttOptions {
                lwt_topic: Some("gw/lwt".to_string()),
                ..Default::default()
            },
            ble: BleOptions {
                scanning_mode: Some(ScanningMode::Passive),
                time_sync: Some(vec!["11:22:33:44:55:66".to_string()]),
                ..Default::default()
            },
            discovery: DiscoveryOptions {
                hass_discovery: Some(0),
                discovery_filter: Some(Vec::new()),
                ..Default::default()
            },
        };

        options.overlay(&mut config);

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.lwt_topic, "gw/lwt");
        assert_eq!(config.scanning_mode, ScanningMode::Passive);
        assert_eq!(config.time_sync, vec!["11:22:33:44:55:66".to_string()]);
        assert_eq!(config.hass_discovery, 0);
        assert!(config.discovery_filter.is_empty());
    }

    #[test]
    fn empty_options_leave_config_unchanged() {
        let mut config = GatewayConfig::defaults().clone();
        GatewayOptions::default().overlay(&mut config);
        assert_eq!(&config, GatewayConfig::defaults());
    }
}
