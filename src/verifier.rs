use tracing::warn;
use waste_sort_common::{BotVerifier, VerifyAction};

/// 事前に取得した検証トークンをそのまま使う
///
/// CLIではブラウザのウィジェットを動かせないため、トークンは引数か環境変数で渡す。
#[derive(Debug, Clone, Default)]
pub struct StaticToken {
    token: Option<String>,
}

impl StaticToken {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }
}

impl BotVerifier for StaticToken {
    async fn execute(&self, action: VerifyAction) -> Option<String> {
        if self.token.is_none() {
            warn!(action = action.as_str(), "verification token not provided");
        }
        self.token.clone()
    }
}
