use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub date: Option<String>,
    pub tick_secs: Option<u64>,
    pub no_color: Option<bool>,
    pub no_splash: Option<bool>,
    pub window: Option<WindowConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WindowConfig {
    pub start: Option<String>,
    pub minutes: Option<u32>,
}
