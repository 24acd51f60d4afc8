/// Standard unencrypted MQTT port, used when `mqtt_port` is omitted
pub const DEFAULT_MQTT_PORT: u16 = 1883;

/// Topic used when `mqtt_topic` is omitted
pub const DEFAULT_MQTT_TOPIC: &str = "vehicle/gps";
