//! The trader draft: every value the form holds

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::config::{DEFAULT_INITIAL_BALANCE, DEFAULT_SCAN_INTERVAL_MINUTES};
use super::field::FieldKey;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AiModel {
    #[default]
    Deepseek,
    Qwen,
    Custom,
}

impl AiModel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Deepseek => "DeepSeek",
            Self::Qwen => "Qwen",
            Self::Custom => "Custom API",
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Deepseek => Self::Custom,
            Self::Qwen => Self::Deepseek,
            Self::Custom => Self::Qwen,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Deepseek => Self::Qwen,
            Self::Qwen => Self::Custom,
            Self::Custom => Self::Deepseek,
        }
    }
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Exchange {
    #[default]
    Hyperliquid,
    Binance,
}

impl Exchange {
    pub fn label(self) -> &'static str {
        match self {
            Self::Hyperliquid => "Hyperliquid",
            Self::Binance => "Binance",
        }
    }

    pub fn previous(self) -> Self {
        self.next()
    }

    pub fn next(self) -> Self {
        match self {
            Self::Hyperliquid => Self::Binance,
            Self::Binance => Self::Hyperliquid,
        }
    }
}

/// Credentials for every AI backend. Only the group matching `ai_model` is
/// meaningful; the others keep whatever was typed before a switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiKeys {
    pub deepseek_key: String,
    pub qwen_key: String,
    pub custom_api_url: String,
    pub custom_api_key: String,
    pub custom_model_name: String,
}

/// Credentials for every exchange, with the same persistence rule as [`AiKeys`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeKeys {
    pub hyperliquid_private_key: String,
    pub hyperliquid_wallet_addr: String,
    pub hyperliquid_testnet: bool,
    pub binance_api_key: String,
    pub binance_secret_key: String,
}

/// Everything the create-trader call receives. Serializes to one flat JSON
/// object with 17 keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraderDraft {
    pub id: String,
    pub name: String,
    pub enabled: bool,
    pub ai_model: AiModel,
    #[serde(flatten)]
    pub ai_keys: AiKeys,
    pub exchange: Exchange,
    #[serde(flatten)]
    pub exchange_keys: ExchangeKeys,
    pub initial_balance: Decimal,
    pub scan_interval_minutes: u32,
}

pub const DEFAULT_DRAFT: TraderDraft = TraderDraft {
    id: String::new(),
    name: String::new(),
    enabled: true,
    ai_model: AiModel::Deepseek,
    ai_keys: AiKeys {
        deepseek_key: String::new(),
        qwen_key: String::new(),
        custom_api_url: String::new(),
        custom_api_key: String::new(),
        custom_model_name: String::new(),
    },
    exchange: Exchange::Hyperliquid,
    exchange_keys: ExchangeKeys {
        hyperliquid_private_key: String::new(),
        hyperliquid_wallet_addr: String::new(),
        hyperliquid_testnet: false,
        binance_api_key: String::new(),
        binance_secret_key: String::new(),
    },
    initial_balance: Decimal::from_parts(DEFAULT_INITIAL_BALANCE, 0, 0, false, 0),
    scan_interval_minutes: DEFAULT_SCAN_INTERVAL_MINUTES,
};

impl Default for TraderDraft {
    fn default() -> Self {
        DEFAULT_DRAFT
    }
}

/// The AI credential group selected by `ai_model`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiCredentials<'a> {
    Deepseek { api_key: &'a str },
    Qwen { api_key: &'a str },
    Custom { api_url: &'a str, api_key: &'a str, model_name: &'a str },
}

/// The exchange credential group selected by `exchange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeCredentials<'a> {
    Hyperliquid { private_key: &'a str, wallet_addr: &'a str, testnet: bool },
    Binance { api_key: &'a str, secret_key: &'a str },
}

impl TraderDraft {
    pub fn ai_credentials(&self) -> AiCredentials<'_> {
        let keys = &self.ai_keys;
        match self.ai_model {
            AiModel::Deepseek => AiCredentials::Deepseek { api_key: &keys.deepseek_key },
            AiModel::Qwen => AiCredentials::Qwen { api_key: &keys.qwen_key },
            AiModel::Custom => AiCredentials::Custom {
                api_url: &keys.custom_api_url,
                api_key: &keys.custom_api_key,
                model_name: &keys.custom_model_name,
            },
        }
    }

    pub fn exchange_credentials(&self) -> ExchangeCredentials<'_> {
        let keys = &self.exchange_keys;
        match self.exchange {
            Exchange::Hyperliquid => ExchangeCredentials::Hyperliquid {
                private_key: &keys.hyperliquid_private_key,
                wallet_addr: &keys.hyperliquid_wallet_addr,
                testnet: keys.hyperliquid_testnet,
            },
            Exchange::Binance => ExchangeCredentials::Binance {
                api_key: &keys.binance_api_key,
                secret_key: &keys.binance_secret_key,
            },
        }
    }

    /// Credential fields outside the active groups that still hold a
    /// non-default value. These are submitted as-is.
    pub fn stale_fields(&self) -> Vec<FieldKey> {
        FieldKey::CREDENTIALS
            .into_iter()
            .filter(|key| !key.is_active(self.ai_model, self.exchange))
            .filter(|key| self.field(*key) != DEFAULT_DRAFT.field(*key))
            .collect()
    }
}
