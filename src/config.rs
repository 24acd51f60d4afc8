use core::fmt;

pub struct Config {
    // Wi-Fi SSID to connect to
    pub wifi_ssid: &'static str,

    // Wi-Fi pre-shared key (password)
    pub wifi_psk: &'static str,

    // MQTT broker hostname or IP address
    pub mqtt_hostname: &'static str,

    // MQTT port (usually 1883, unencrypted)
    pub mqtt_port: u16,

    // MQTT username for authentication, blank disables auth
    pub mqtt_username: &'static str,

    // MQTT password for authentication, blank if unused
    pub mqtt_password: &'static str,

    // MQTT topic GPS fixes are published to
    pub mqtt_topic: &'static str,
}

impl Config {
    /// Username/password pair to present to the broker, or `None` when the
    /// username is blank.
    ///
    /// Only the username decides: a blank password with a username set still
    /// yields credentials.
    pub fn mqtt_credentials(&self) -> Option<(&'static str, &'static str)> {
        if self.mqtt_username.is_empty() {
            None
        } else {
            Some((self.mqtt_username, self.mqtt_password))
        }
    }

    /// Logs the configuration with secrets redacted.
    pub fn log_summary(&self) {
        log::info!("Configuration: {}", self);
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() {
        "<unset>"
    } else {
        "<set>"
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "wifi_ssid={:?} wifi_psk={} mqtt={}:{} mqtt_username={:?} mqtt_password={} mqtt_topic={:?}",
            self.wifi_ssid,
            redact(self.wifi_psk),
            self.mqtt_hostname,
            self.mqtt_port,
            self.mqtt_username,
            redact(self.mqtt_password),
            self.mqtt_topic,
        )
    }
}

// config values are generated at compile time
include!(concat!(env!("OUT_DIR"), "/config.rs"));
