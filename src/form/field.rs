//! Field keys and the typed values they accept

use rust_decimal::Decimal;
use strum::{AsRefStr, Display, EnumIter};

use crate::error::FieldError;
use super::draft::{AiModel, Exchange, TraderDraft};

/// One key per draft field, named as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum FieldKey {
    Id,
    Name,
    Enabled,
    AiModel,
    DeepseekKey,
    QwenKey,
    CustomApiUrl,
    CustomApiKey,
    CustomModelName,
    Exchange,
    HyperliquidPrivateKey,
    HyperliquidWalletAddr,
    HyperliquidTestnet,
    BinanceApiKey,
    BinanceSecretKey,
    InitialBalance,
    ScanIntervalMinutes,
}

impl FieldKey {
    pub const CREDENTIALS: [FieldKey; 10] = [
        Self::DeepseekKey,
        Self::QwenKey,
        Self::CustomApiUrl,
        Self::CustomApiKey,
        Self::CustomModelName,
        Self::HyperliquidPrivateKey,
        Self::HyperliquidWalletAddr,
        Self::HyperliquidTestnet,
        Self::BinanceApiKey,
        Self::BinanceSecretKey,
    ];

    /// Whether this field belongs to a group that is active for the given
    /// selections. Non-credential fields are always active.
    pub fn is_active(self, ai_model: AiModel, exchange: Exchange) -> bool {
        match self {
            Self::DeepseekKey => ai_model == AiModel::Deepseek,
            Self::QwenKey => ai_model == AiModel::Qwen,
            Self::CustomApiUrl | Self::CustomApiKey | Self::CustomModelName => {
                ai_model == AiModel::Custom
            }
            Self::HyperliquidPrivateKey
            | Self::HyperliquidWalletAddr
            | Self::HyperliquidTestnet => {
                exchange == Exchange::Hyperliquid
            }
            Self::BinanceApiKey | Self::BinanceSecretKey => exchange == Exchange::Binance,
            _ => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    AiModel(AiModel),
    Exchange(Exchange),
    Decimal(Decimal),
    Integer(u32),
}

impl FieldValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Flag(_) => "boolean",
            Self::AiModel(_) => "AI model",
            Self::Exchange(_) => "exchange",
            Self::Decimal(_) => "decimal",
            Self::Integer(_) => "integer",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<AiModel> for FieldValue {
    fn from(model: AiModel) -> Self {
        Self::AiModel(model)
    }
}

impl From<Exchange> for FieldValue {
    fn from(exchange: Exchange) -> Self {
        Self::Exchange(exchange)
    }
}

impl TraderDraft {
    fn text_slot(&self, key: FieldKey) -> Option<&String> {
        let (ai, ex) = (&self.ai_keys, &self.exchange_keys);
        Some(match key {
            FieldKey::Id => &self.id,
            FieldKey::Name => &self.name,
            FieldKey::DeepseekKey => &ai.deepseek_key,
            FieldKey::QwenKey => &ai.qwen_key,
            FieldKey::CustomApiUrl => &ai.custom_api_url,
            FieldKey::CustomApiKey => &ai.custom_api_key,
            FieldKey::CustomModelName => &ai.custom_model_name,
            FieldKey::HyperliquidPrivateKey => &ex.hyperliquid_private_key,
            FieldKey::HyperliquidWalletAddr => &ex.hyperliquid_wallet_addr,
            FieldKey::BinanceApiKey => &ex.binance_api_key,
            FieldKey::BinanceSecretKey => &ex.binance_secret_key,
            _ => return None,
        })
    }

    fn text_slot_mut(&mut self, key: FieldKey) -> Option<&mut String> {
        let (ai, ex) = (&mut self.ai_keys, &mut self.exchange_keys);
        Some(match key {
            FieldKey::Id => &mut self.id,
            FieldKey::Name => &mut self.name,
            FieldKey::DeepseekKey => &mut ai.deepseek_key,
            FieldKey::QwenKey => &mut ai.qwen_key,
            FieldKey::CustomApiUrl => &mut ai.custom_api_url,
            FieldKey::CustomApiKey => &mut ai.custom_api_key,
            FieldKey::CustomModelName => &mut ai.custom_model_name,
            FieldKey::HyperliquidPrivateKey => &mut ex.hyperliquid_private_key,
            FieldKey::HyperliquidWalletAddr => &mut ex.hyperliquid_wallet_addr,
            FieldKey::BinanceApiKey => &mut ex.binance_api_key,
            FieldKey::BinanceSecretKey => &mut ex.binance_secret_key,
            _ => return None,
        })
    }

    /// Current value of one field.
    pub fn field(&self, key: FieldKey) -> FieldValue {
        match key {
            FieldKey::Enabled => FieldValue::Flag(self.enabled),
            FieldKey::HyperliquidTestnet => {
                FieldValue::Flag(self.exchange_keys.hyperliquid_testnet)
            }
            FieldKey::AiModel => FieldValue::AiModel(self.ai_model),
            FieldKey::Exchange => FieldValue::Exchange(self.exchange),
            FieldKey::InitialBalance => FieldValue::Decimal(self.initial_balance),
            FieldKey::ScanIntervalMinutes => FieldValue::Integer(self.scan_interval_minutes),
            text_key => FieldValue::Text(self.text_slot(text_key).cloned().unwrap_or_default()),
        }
    }

    /// Copy of this draft with `key` replaced by `value`; all other fields
    /// are carried over untouched.
    pub fn with_field(&self, key: FieldKey, value: FieldValue) -> Result<TraderDraft, FieldError> {
        let mismatch = FieldError { key, got: value.kind() };
        let mut next = self.clone();

        match value {
            FieldValue::Text(text) => {
                *next.text_slot_mut(key).ok_or(mismatch)? = text;
            }
            FieldValue::Flag(flag) => match key {
                FieldKey::Enabled => next.enabled = flag,
                FieldKey::HyperliquidTestnet => next.exchange_keys.hyperliquid_testnet = flag,
                _ => return Err(mismatch),
            },
            FieldValue::AiModel(model) if key == FieldKey::AiModel => next.ai_model = model,
            FieldValue::Exchange(exchange) if key == FieldKey::Exchange => next.exchange = exchange,
            FieldValue::Decimal(balance) if key == FieldKey::InitialBalance => {
                next.initial_balance = balance
            }
            FieldValue::Integer(minutes) if key == FieldKey::ScanIntervalMinutes => {
                next.scan_interval_minutes = minutes
            }
            _ => return Err(mismatch),
        }

        Ok(next)
    }
}
