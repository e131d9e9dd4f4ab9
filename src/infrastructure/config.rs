use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    /// Seed bot message shown before any user input
    pub greeting: String,
    /// Reply when no topic keyword matches
    pub fallback: String,
    /// Synthetic processing latency before a reply is delivered
    pub reply_delay_ms: u64,
    #[serde(default)]
    pub topics: Vec<TopicConfig>,
}

/// One canned topic: matched in file order, first hit wins
#[derive(Debug, Deserialize, Clone)]
pub struct TopicConfig {
    pub id: String,
    pub keywords: Vec<String>,
    pub reply: String,
}

pub fn load_server_config() -> anyhow::Result<ServerConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/server"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_assistant_config() -> anyhow::Result<AssistantConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/assistant"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
