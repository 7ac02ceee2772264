//! Which controls the form shows for a given AI model and exchange.
//!
//! `visible_fields` is a pure function of the two selections. Values held
//! by fields it leaves out are never touched.

use rust_decimal::Decimal;
use strum::EnumIter;

use crate::i18n::{t, Language, TextKey};
use super::draft::{AiModel, Exchange};
use super::field::FieldKey;
use self::Label::{Literal, Localized};
use FieldKey as K;
use InputKind as I;
use Section as S;

const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Password,
    Url,
    Select,
    Checkbox,
    Number { min: Decimal, step: Decimal },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Section {
    BasicInfo,
    AiConfiguration,
    ExchangeConfiguration,
    TradingParameters,
}

impl Section {
    pub fn title(self) -> TextKey {
        match self {
            Self::BasicInfo => TextKey::BasicInfo,
            Self::AiConfiguration => TextKey::AiConfiguration,
            Self::ExchangeConfiguration => TextKey::ExchangeConfiguration,
            Self::TradingParameters => TextKey::TradingParameters,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Localized(TextKey),
    Literal(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub section: Section,
    pub kind: InputKind,
    pub required: bool,
    pub label: Label,
    pub unit: Option<Label>,
    pub placeholder: &'static str,
}

impl FieldSpec {
    const fn new(key: FieldKey, section: Section, kind: InputKind, label: Label) -> Self {
        Self {
            key,
            section,
            kind,
            required: true,
            label,
            unit: None,
            placeholder: "",
        }
    }

    const fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    const fn unit(mut self, unit: Label) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Label as displayed, with the unit and required marker appended.
    pub fn display_label(&self, language: Language) -> String {
        let mut text = resolve(self.label, language).to_string();
        if let Some(unit) = self.unit {
            text.push_str(&format!(" ({})", resolve(unit, language)));
        }
        if self.required {
            text.push_str(" *");
        }
        text
    }

    /// Whether typed characters edit this control.
    pub fn is_typed(&self) -> bool {
        matches!(
            self.kind,
            InputKind::Text | InputKind::Password | InputKind::Url | InputKind::Number { .. }
        )
    }
}

fn resolve(label: Label, language: Language) -> &'static str {
    match label {
        Label::Localized(key) => t(key, language),
        Label::Literal(text) => text,
    }
}

const ID: FieldSpec = FieldSpec::new(K::Id, S::BasicInfo, I::Text, Localized(TextKey::TraderId))
    .placeholder("e.g., hyperliquid_deepseek_2");
const NAME: FieldSpec =
    FieldSpec::new(K::Name, S::BasicInfo, I::Text, Localized(TextKey::TraderName))
        .placeholder("e.g., Hyperliquid DeepSeek Trader #2");

const AI_MODEL: FieldSpec =
    FieldSpec::new(K::AiModel, S::AiConfiguration, I::Select, Localized(TextKey::AiModel));
const DEEPSEEK_KEY: FieldSpec =
    FieldSpec::new(K::DeepseekKey, S::AiConfiguration, I::Password, Literal("DeepSeek API Key"))
        .placeholder("sk-...");
const QWEN_KEY: FieldSpec =
    FieldSpec::new(K::QwenKey, S::AiConfiguration, I::Password, Literal("Qwen API Key"))
        .placeholder("sk-...");
const CUSTOM_API_URL: FieldSpec =
    FieldSpec::new(K::CustomApiUrl, S::AiConfiguration, I::Url, Literal("Custom API URL"))
        .placeholder("https://...");
const CUSTOM_API_KEY: FieldSpec =
    FieldSpec::new(K::CustomApiKey, S::AiConfiguration, I::Password, Literal("Custom API Key"))
        .placeholder("sk-...");
const CUSTOM_MODEL_NAME: FieldSpec =
    FieldSpec::new(K::CustomModelName, S::AiConfiguration, I::Text, Literal("Model Name"))
        .placeholder("gpt-4");

const EXCHANGE: FieldSpec =
    FieldSpec::new(K::Exchange, S::ExchangeConfiguration, I::Select, Localized(TextKey::Exchange));
const HYPERLIQUID_PRIVATE_KEY: FieldSpec = FieldSpec::new(
    K::HyperliquidPrivateKey,
    S::ExchangeConfiguration,
    I::Password,
    Localized(TextKey::PrivateKey),
)
.placeholder("0x...");
const HYPERLIQUID_WALLET_ADDR: FieldSpec = FieldSpec::new(
    K::HyperliquidWalletAddr,
    S::ExchangeConfiguration,
    I::Text,
    Localized(TextKey::WalletAddress),
)
.placeholder("0x...");
const HYPERLIQUID_TESTNET: FieldSpec = FieldSpec::new(
    K::HyperliquidTestnet,
    S::ExchangeConfiguration,
    I::Checkbox,
    Localized(TextKey::UseTestnet),
)
.optional();
const BINANCE_API_KEY: FieldSpec = FieldSpec::new(
    K::BinanceApiKey,
    S::ExchangeConfiguration,
    I::Password,
    Literal("Binance API Key"),
)
.placeholder("...");
const BINANCE_SECRET_KEY: FieldSpec = FieldSpec::new(
    K::BinanceSecretKey,
    S::ExchangeConfiguration,
    I::Password,
    Literal("Binance Secret Key"),
)
.placeholder("...");

const INITIAL_BALANCE: FieldSpec = FieldSpec::new(
    K::InitialBalance,
    S::TradingParameters,
    I::Number { min: Decimal::ZERO, step: CENT },
    Localized(TextKey::InitialBalance),
)
.unit(Literal("USDT"));
const SCAN_INTERVAL: FieldSpec = FieldSpec::new(
    K::ScanIntervalMinutes,
    S::TradingParameters,
    I::Number { min: Decimal::ONE, step: Decimal::ONE },
    Localized(TextKey::ScanInterval),
)
.unit(Localized(TextKey::Minutes));

/// Controls shown for the given selections, in render order.
pub fn visible_fields(ai_model: AiModel, exchange: Exchange) -> Vec<FieldSpec> {
    let mut fields = vec![ID, NAME, AI_MODEL];

    match ai_model {
        AiModel::Deepseek => fields.push(DEEPSEEK_KEY),
        AiModel::Qwen => fields.push(QWEN_KEY),
        AiModel::Custom => fields.extend([CUSTOM_API_URL, CUSTOM_API_KEY, CUSTOM_MODEL_NAME]),
    }

    fields.push(EXCHANGE);
    match exchange {
        Exchange::Hyperliquid => {
            fields.extend([HYPERLIQUID_PRIVATE_KEY, HYPERLIQUID_WALLET_ADDR, HYPERLIQUID_TESTNET])
        }
        Exchange::Binance => fields.extend([BINANCE_API_KEY, BINANCE_SECRET_KEY]),
    }

    fields.extend([INITIAL_BALANCE, SCAN_INTERVAL]);
    fields
}

/// Spec for one field regardless of visibility.
pub fn field_spec(key: FieldKey) -> Option<FieldSpec> {
    [
        ID,
        NAME,
        AI_MODEL,
        DEEPSEEK_KEY,
        QWEN_KEY,
        CUSTOM_API_URL,
        CUSTOM_API_KEY,
        CUSTOM_MODEL_NAME,
        EXCHANGE,
        HYPERLIQUID_PRIVATE_KEY,
        HYPERLIQUID_WALLET_ADDR,
        HYPERLIQUID_TESTNET,
        BINANCE_API_KEY,
        BINANCE_SECRET_KEY,
        INITIAL_BALANCE,
        SCAN_INTERVAL,
    ]
    .into_iter()
    .find(|spec| spec.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn keys(ai_model: AiModel, exchange: Exchange) -> Vec<FieldKey> {
        visible_fields(ai_model, exchange).into_iter().map(|f| f.key).collect()
    }

    #[test]
    fn exactly_one_credential_group_per_selector() {
        for ai_model in AiModel::iter() {
            for exchange in Exchange::iter() {
                let shown = keys(ai_model, exchange);
                for key in FieldKey::CREDENTIALS {
                    let active = key.is_active(ai_model, exchange);
                    assert_eq!(shown.contains(&key), active, "{key} for {ai_model}/{exchange}");
                }
            }
        }
    }

    #[test]
    fn custom_and_binance_layout() {
        assert_eq!(
            keys(AiModel::Custom, Exchange::Binance),
            vec![
                K::Id,
                K::Name,
                K::AiModel,
                K::CustomApiUrl,
                K::CustomApiKey,
                K::CustomModelName,
                K::Exchange,
                K::BinanceApiKey,
                K::BinanceSecretKey,
                K::InitialBalance,
                K::ScanIntervalMinutes,
            ]
        );
    }

    #[test]
    fn testnet_checkbox_is_the_only_optional_control() {
        for ai_model in AiModel::iter() {
            for exchange in Exchange::iter() {
                let optional: Vec<FieldKey> = visible_fields(ai_model, exchange)
                    .into_iter()
                    .filter(|f| !f.required && f.kind != InputKind::Select)
                    .map(|f| f.key)
                    .collect();
                let expected = match exchange {
                    Exchange::Hyperliquid => vec![K::HyperliquidTestnet],
                    Exchange::Binance => vec![],
                };
                assert_eq!(optional, expected, "{ai_model}/{exchange}");
            }
        }
    }

    #[test]
    fn every_typed_credential_is_required() {
        for ai_model in AiModel::iter() {
            for exchange in Exchange::iter() {
                for spec in visible_fields(ai_model, exchange) {
                    if spec.is_typed() {
                        assert!(spec.required, "{} for {ai_model}/{exchange}", spec.key);
                    }
                }
            }
        }
    }

    #[test]
    fn labels_carry_units_and_markers() {
        assert_eq!(INITIAL_BALANCE.display_label(Language::En), "Initial Balance (USDT) *");
        assert_eq!(SCAN_INTERVAL.display_label(Language::En), "Scan Interval (minutes) *");
        assert_eq!(HYPERLIQUID_TESTNET.display_label(Language::En), "Use Testnet");
        assert_eq!(QWEN_KEY.display_label(Language::Zh), "Qwen API Key *");
    }

    #[test]
    fn field_spec_covers_every_rendered_key() {
        for key in FieldKey::iter().filter(|k| *k != K::Enabled) {
            assert!(field_spec(key).is_some(), "{key}");
        }
        assert!(field_spec(K::Enabled).is_none());
    }
}
