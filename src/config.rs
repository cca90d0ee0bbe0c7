/// Whether the bot is installed privately (full message firehose) or
/// publicly (filtered public messages only). Decides the IDENTIFY intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotKind {
    Private,
    Public,
}

/// Immutable credentials and endpoints supplied by the hosting process.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub app_id: String,
    pub token: String,
    pub kind: BotKind,
    /// REST base URL used to discover the negotiated gateway URL.
    pub api_base: String,
}

impl GatewayConfig {
    pub fn new(
        app_id: impl Into<String>,
        token: impl Into<String>,
        kind: BotKind,
        api_base: impl Into<String>,
    ) -> Self {
        Self {
            app_id: app_id.into(),
            token: token.into(),
            kind,
            api_base: api_base.into(),
        }
    }

    /// Authorization string carried in IDENTIFY/RESUME and on REST calls.
    pub fn authorization(&self) -> String {
        format!("Bot {}.{}", self.app_id, self.token)
    }
}
